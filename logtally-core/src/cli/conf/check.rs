use crate::conf::{ConfigError, ConfigOverrides, resolve_config};
use std::path::PathBuf;

pub fn check(path: Option<PathBuf>, plain: bool) -> anyhow::Result<()> {
    match resolve_config(path.as_deref(), ConfigOverrides::default()) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ input: {}", cfg.input_path.display());
            println!("✔ report: {}", cfg.report_path.display());
            println!("✔ clean log: {}", cfg.clean_log_path.display());
            println!("✔ summary: {}", cfg.summary_path.display());
            println!("✔ top {} services / errors", cfg.top_n);
            if !cfg.input_path.exists() {
                println!("! input file does not exist yet");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    eprintln!("{}", err);
    if plain {
        return;
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "Config files are HCL with top-level attributes only.\n\
             \n\
             Example:\n\
             \n\
             input_path     = \"logs.txt\"\n\
             report_path    = \"period1_report.txt\"\n\
             clean_log_path = \"clean_logs.txt\"\n\
             summary_path   = \"summary.json\"\n\
             top_n          = 3",
        ),

        ConfigError::InvalidTopN { .. } => Some(
            "The top services / top errors lists need at least one entry.\n\
             \n\
             Set `top_n` to 1 or more.",
        ),

        ConfigError::OutputClobbersInput { .. } => Some(
            "Writing an output over the input would destroy the log being read.\n\
             \n\
             Pick a different output path.",
        ),

        ConfigError::DuplicateOutput { .. } => Some(
            "The cleaned log and the JSON summary are written by the same run\n\
             and need separate files.",
        ),

        _ => None,
    }
}
