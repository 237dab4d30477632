//! CSV 导出（Valid Emails 视图）

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::ResourceRow;

/// CSV 表头
pub const EXPORT_HEADER: [&str; 3] = ["email", "validation_date", "status"];

/// `valid-emails-20250301-102030.csv`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("valid-emails-{}.csv", now.format("%Y%m%d-%H%M%S"))
}

/// 写出 CSV，返回写入的数据行数
pub fn write_csv<W: Write>(rows: &[ResourceRow], writer: W) -> CoreResult<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER).map_err(csv_error)?;

    for row in rows {
        let date = row.created_at.format("%Y-%m-%d").to_string();
        let status = row.detail.as_deref().unwrap_or("valid");
        wtr.write_record([row.value.as_str(), date.as_str(), status])
            .map_err(csv_error)?;
    }

    wtr.flush()
        .map_err(|e| CoreError::StorageError(e.to_string()))?;
    Ok(rows.len())
}

/// 导出到目录下的新文件，返回文件路径
pub fn export_to_dir(rows: &[ResourceRow], dir: &Path, now: DateTime<Utc>) -> CoreResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
    let path = dir.join(export_file_name(now));
    let file = File::create(&path).map_err(|e| CoreError::StorageError(e.to_string()))?;
    let count = write_csv(rows, file)?;
    log::info!("Exported {count} rows to {}", path.display());
    Ok(path)
}

fn csv_error(e: csv::Error) -> CoreError {
    CoreError::StorageError(format!("CSV write failed: {e}"))
}
