use clap::Args;
use pantry_app::{
    database::{self, Db},
    domain::shops::{PgShopsService, ShopsService, data::NewShop},
};

#[derive(Debug, Args)]
pub(crate) struct CreateShopArgs {
    /// Shop display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateShopArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let shop = PgShopsService::new(Db::new(pool))
        .create_shop(NewShop { name: args.name })
        .await
        .map_err(|error| format!("failed to create shop: {error}"))?;

    println!("shop_id: {}", shop.id);
    println!("shop_name: {}", shop.name);

    Ok(())
}
