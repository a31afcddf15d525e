use catalog_service::catalogs::ProductCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_service::run::<ProductCatalog>().await
}
