use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("lexis")
        .version("1.0.0")
        .author("Lexis Contributors")
        .about("Score web articles on readability and sentiment")
        .arg(clap::arg!([INPUT] "Input table: xlsx or CSV with URL_ID and URL columns"))
        .arg(
            clap::arg!(-o --output <FILE> "Output report file")
                .value_name("FILE")
                .default_value("Output.xlsx")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (xlsx, csv, json)")
                .value_name("FORMAT")
                .value_parser(["xlsx", "csv", "json"]),
        )
        .arg(
            clap::arg!(--lexicon_dir <DIR> "Directory holding the stopword, positive and negative word lists")
                .long("lexicon-dir")
                .value_name("DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(
            clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests")
                .long("user-agent")
                .value_name("UA"),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging and per-row progress"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script and exit")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "lexis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "lexis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "lexis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "lexis", &completions_dir).unwrap();
}
