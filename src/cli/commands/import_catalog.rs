use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, DbErr, Set, TransactionError, TransactionTrait,
};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, trace};

use model::entities::{branch, class, role};

/// Catalog file layout
#[derive(Debug, Deserialize)]
pub struct CatalogDump {
    #[serde(default)]
    pub roles: Vec<CatalogRole>,
    #[serde(default)]
    pub branches: Vec<CatalogBranch>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogRole {
    pub role_id: String,
    pub role_name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogBranch {
    pub branch_id: String,
    pub branch_name: String,
    #[serde(default)]
    pub classes: Vec<CatalogClass>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogClass {
    pub class_id: String,
    pub class_name: String,
}

/// Number of rows inserted per table
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub roles: usize,
    pub branches: usize,
    pub classes: usize,
}

pub async fn import_catalog(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering import_catalog function");
    info!("Starting catalog import");
    debug!("JSON path: {}", json_path);
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let file = File::open(Path::new(json_path))
        .with_context(|| format!("Failed to open file: {}", json_path))?;
    let dump: CatalogDump =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse JSON")?;
    info!(
        "Loaded {} roles and {} branches from {}",
        dump.roles.len(),
        dump.branches.len(),
        json_path
    );

    let summary = insert_catalog(&db, dump)
        .await
        .context("Failed to import catalog")?;

    info!(
        "Imported {} roles, {} branches and {} classes",
        summary.roles, summary.branches, summary.classes
    );
    Ok(())
}

/// Inserts the whole dump in one transaction. Nothing is kept if any row fails.
pub async fn insert_catalog(db: &DatabaseConnection, dump: CatalogDump) -> Result<ImportSummary, DbErr> {
    db.transaction::<_, ImportSummary, DbErr>(move |txn| {
        Box::pin(async move {
            let mut summary = ImportSummary::default();

            for entry in dump.roles {
                role::ActiveModel {
                    role_id: Set(entry.role_id.clone()),
                    role_name: Set(entry.role_name),
                    status: Set(entry.status),
                }
                .insert(txn)
                .await?;
                debug!("Imported role {}", entry.role_id);
                summary.roles += 1;
            }

            for entry in dump.branches {
                branch::ActiveModel {
                    branch_id: Set(entry.branch_id.clone()),
                    branch_name: Set(entry.branch_name),
                }
                .insert(txn)
                .await?;
                debug!("Imported branch {}", entry.branch_id);
                summary.branches += 1;

                for class_entry in entry.classes {
                    class::ActiveModel {
                        class_id: Set(class_entry.class_id),
                        class_name: Set(class_entry.class_name),
                        branch_id: Set(entry.branch_id.clone()),
                    }
                    .insert(txn)
                    .await?;
                    summary.classes += 1;
                }
            }

            Ok(summary)
        })
    })
    .await
    .map_err(|err| match err {
        TransactionError::Connection(err) | TransactionError::Transaction(err) => err,
    })
}
