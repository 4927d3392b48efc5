use crate::error::ScrapeError;
use crate::results::Catalog;
use crate::utils::dated_file_name;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["product_name", "price", "category"];

/// Write the catalog as CSV to any writer
pub fn write_csv<W: Write>(catalog: &Catalog, writer: W) -> Result<(), ScrapeError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in catalog.entries() {
        wtr.write_record([&entry.product_name, &entry.price, &entry.category])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the catalog to `<dir>/<prefix>_<date>.csv`, replacing any file
/// already there, and return the path written
pub fn export_dated(
    catalog: &Catalog,
    dir: &Path,
    prefix: &str,
    date: NaiveDate,
) -> Result<PathBuf, ScrapeError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(dated_file_name(prefix, date));

    if !catalog.is_aligned() {
        ::log::warn!(
            "Exporting {} products with {} prices; rows after the first mismatch are shifted",
            catalog.product_names().len(),
            catalog.prices().len()
        );
    }

    let file = std::fs::File::create(&path)?;
    write_csv(catalog, file)?;
    ::log::info!("Wrote {} rows to {}", catalog.len(), path.display());
    Ok(path)
}

/// Export using today's local date
pub fn export_today(catalog: &Catalog, dir: &Path, prefix: &str) -> Result<PathBuf, ScrapeError> {
    export_dated(catalog, dir, prefix, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::PageState;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let state = PageState {
            url: "https://shop.example/snacks/".to_string(),
            category: "Snacks".to_string(),
            page_index: 0,
        };
        catalog.record_page(
            &state,
            vec!["Chips, salted".to_string(), "Pretzels".to_string()],
            vec!["AED 4.50".to_string()],
        );
        catalog
    }

    #[test]
    fn test_write_csv_rows() {
        let mut buffer = Vec::new();
        write_csv(&sample_catalog(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "product_name,price,category\n\"Chips, salted\",AED 4.50,Snacks\nPretzels,,Snacks\n"
        );
    }

    #[test]
    fn test_export_dated_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let path = export_dated(&sample_catalog(), dir.path(), "products", date).unwrap();
        assert_eq!(path.file_name().unwrap(), "products_2024-05-01.csv");

        let again = export_dated(&Catalog::new(), dir.path(), "products", date).unwrap();
        assert_eq!(again, path);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "product_name,price,category\n");
    }
}
