//! JSON output.
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Error;

/// Write `value` as 4-space indented JSON, creating parent folders if needed.
/// Non-ASCII characters are written as is.
pub fn write_json<T: Serialize + ?Sized>(value: &T, dst: &Path) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("writing {:?}", dst);
    let mut writer = BufWriter::new(File::create(dst)?);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

/// Insert `_<percent>` before the extension of `base`.
///
/// `dataset/research_text.json` becomes `dataset/research_text_20.json`.
pub fn subset_path(base: &Path, percent: u32) -> PathBuf {
    let mut name = OsString::from(base.file_stem().unwrap_or_default());
    name.push(format!("_{}", percent));
    if let Some(ext) = base.extension() {
        name.push(".");
        name.push(ext);
    }
    base.with_file_name(name)
}
