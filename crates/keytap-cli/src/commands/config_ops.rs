use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", keytap_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        keytap_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: display.line_width={}, corpus word lengths {}..={}, index.file_name={}",
        s.display.line_width, s.corpus.min_word_len, s.corpus.max_word_len, s.index.file_name
    );
}
