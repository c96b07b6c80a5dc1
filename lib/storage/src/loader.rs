// CSV loading of the cleaned product dataset
use crate::clean::{clean_image, clean_value, normalize_category, parse_price, parse_rating};
use prodsim_core::{Catalog, Error, Product, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const REQUIRED_COLUMNS: &[&str] = &["product_name", "description"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Default)]
struct Columns {
    name: usize,
    description: usize,
    image: Option<usize>,
    brand: Option<usize>,
    retail_price: Option<usize>,
    discounted_price: Option<usize>,
    product_rating: Option<usize>,
    overall_rating: Option<usize>,
    category: Option<usize>,
    category_tree: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        Ok(Self {
            name: require(REQUIRED_COLUMNS[0])?,
            description: require(REQUIRED_COLUMNS[1])?,
            image: find("image"),
            brand: find("brand"),
            retail_price: find("retail_price"),
            discounted_price: find("discounted_price"),
            product_rating: find("product_rating"),
            overall_rating: find("overall_rating"),
            category: find("category"),
            category_tree: find("product_category_tree"),
        })
    }
}

/// Reads the tabular dataset into a [`Catalog`]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a CSV file with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| Error::DataSource(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::load(reader)?;
        info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load a catalog from any CSV byte stream with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::load(reader)
    }

    fn load<R: Read>(mut reader: csv::Reader<R>) -> Result<Catalog> {
        let headers = reader
            .headers()
            .map_err(|e| Error::DataSource(format!("failed to read headers: {}", e)))?
            .clone();
        let columns = Columns::resolve(&headers)?;

        let mut products = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Error::InvalidRecord {
                row,
                message: e.to_string(),
            })?;
            products.push(Self::parse_row(row, &record, &columns)?);
        }

        if products.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        debug!("Parsed {} rows", products.len());

        Catalog::new(products)
    }

    fn parse_row(row: usize, record: &csv::StringRecord, columns: &Columns) -> Result<Product> {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let name = clean_value(cell(Some(columns.name))).ok_or_else(|| Error::InvalidRecord {
            row,
            message: "product_name is empty".to_string(),
        })?;
        let description =
            clean_value(cell(Some(columns.description))).ok_or_else(|| Error::InvalidRecord {
                row,
                message: "description is empty".to_string(),
            })?;

        let category = match columns.category {
            Some(idx) => normalize_category(cell(Some(idx))),
            None => normalize_category(cell(columns.category_tree)),
        };

        let mut product = Product::new(name, description, category).with_prices(
            parse_price(cell(columns.discounted_price)),
            parse_price(cell(columns.retail_price)),
        );
        product.image = clean_image(cell(columns.image));
        product.brand = clean_value(cell(columns.brand));
        product.product_rating = parse_rating(cell(columns.product_rating));
        product.rating = parse_rating(cell(columns.overall_rating));
        Ok(product)
    }
}
