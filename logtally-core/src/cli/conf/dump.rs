use crate::conf::{ConfigOverrides, resolve_config};
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: Option<PathBuf>, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = resolve_config(path.as_deref(), ConfigOverrides::default())?;

    // default: json
    if yaml && !json {
        dump_yaml(&cfg)
    } else {
        dump_json(&cfg)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
