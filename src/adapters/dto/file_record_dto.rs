use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::file_record_dto::FileRecordDTO;

impl FromRow<'_, PgRow> for FileRecordDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let file_size: i64 = row.try_get("file_size")?;
        let download_count: i64 = row.try_get("download_count")?;

        Ok(FileRecordDTO {
            id: row.try_get("id")?,
            filename: Some(row.try_get("filename")?),
            original_name: Some(row.try_get("original_name")?),
            mime_type: Some(row.try_get("mime_type")?),
            file_size: Some(file_size as u64),
            file_path: Some(row.try_get("file_path")?),
            upload_date: Some(row.try_get("upload_date")?),
            download_count: Some(download_count as u64),
        })
    }
}

impl FileRecordDTO {
    pub fn sanitize(&mut self) {
        if let Some(file_size) = self.file_size {
            self.file_size = Some(std::cmp::min(file_size, i64::MAX as u64));
        }
        if let Some(download_count) = self.download_count {
            self.download_count = Some(std::cmp::min(download_count, i64::MAX as u64));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::application::dto::file_record_dto::FileRecordDTO;

    #[test]
    fn sanitize_clamps_counters_to_i64_range() {
        let mut dto = FileRecordDTO {
            file_size: Some(u64::MAX),
            download_count: Some(u64::MAX),
            ..Default::default()
        };
        dto.sanitize();
        assert_eq!(dto.file_size, Some(i64::MAX as u64));
        assert_eq!(dto.download_count, Some(i64::MAX as u64));
    }

    #[test]
    fn sanitize_leaves_in_range_values_alone() {
        let mut dto = FileRecordDTO {
            file_size: Some(1024),
            download_count: Some(3),
            ..Default::default()
        };
        dto.sanitize();
        assert_eq!(dto.file_size, Some(1024));
        assert_eq!(dto.download_count, Some(3));
    }
}
