use clap::Args;
use pantry_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, data::NewVolumeUnit},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUnitArgs {
    /// Volume unit name, e.g. `L` or `kg`
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUnitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let unit = PgProductsService::new(Db::new(pool))
        .create_volume_unit(NewVolumeUnit { name: args.name })
        .await
        .map_err(|error| format!("failed to create volume unit: {error}"))?;

    println!("unit_id: {}", unit.id);
    println!("unit_name: {}", unit.name);

    Ok(())
}
