use catalog_service::catalogs::OrderCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_service::run::<OrderCatalog>().await
}
