use crate::adapters::storage::LocalStorage;
use crate::app::render::{render_record, render_records};
use crate::config::cli::{CliConfig, Command, ResourceAction, StoreAction, UserAction};
use crate::config::toml_config::ClientConfig;
use crate::core::client::ResourceClient;
use crate::core::inventory::InventoryApi;
use crate::core::store::{DivisionStore, StateStore};
use crate::domain::model::{DivisionState, UserProfileUpdate};
use crate::domain::ports::Storage;
use crate::domain::resource::{Resource, ResourceId};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;

/// 執行一個 CLI 指令，結果寫到 `out`
pub async fn run<W: Write>(cli: &CliConfig, out: &mut W) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            ClientConfig::from_file(path)?
        }
        None => ClientConfig::default(),
    };
    config.validate()?;

    if let Command::Store { action } = &cli.command {
        let store: DivisionStore<LocalStorage> =
            StateStore::new(LocalStorage::new(config.store_dir()), config.store.key.clone());
        return run_store(&store, action, out).await;
    }

    let api = InventoryApi::from_config(&config, cli.base_url.as_deref())?;
    let token = cli.token.as_deref().or(config.token());

    match &cli.command {
        Command::Batch { action } => run_resource(&api.batches(), action, out).await,
        Command::Configuration { action } => {
            run_resource(&api.configurations(), action, out).await
        }
        Command::Coordinator { action } => run_resource(&api.coordinators(), action, out).await,
        Command::District { action } => run_resource(&api.districts(), action, out).await,
        Command::Division { action } => run_resource(&api.divisions(), action, out).await,
        Command::Municipality { action } => {
            run_resource(&api.municipalities(), action, out).await
        }
        Command::Package { action } => run_resource(&api.packages(), action, out).await,
        Command::School { action } => run_resource(&api.schools(), action, out).await,
        Command::SchoolBatchList { action } => {
            run_resource(&api.school_batch_lists(), action, out).await
        }
        Command::SchoolContact { action } => {
            run_resource(&api.school_contacts(), action, out).await
        }
        Command::SchoolEnergy { action } => run_resource(&api.school_energy(), action, out).await,
        Command::SchoolNtc { action } => run_resource(&api.school_ntc(), action, out).await,
        Command::Provider { action } => run_resource(&api.providers(), action, out).await,
        Command::User { action } => {
            let users = api.users();
            match action {
                UserAction::Common(action) => run_resource(&users, action, out).await,
                UserAction::UpdateProfile { id, file } => {
                    let update: UserProfileUpdate = read_json(file).await?;
                    let user = users.update_profile(*id, &update, token).await?;
                    tracing::info!("✅ Updated profile of user {}", id);
                    render_record(&user, out)
                }
                UserAction::ResetPassword { id, password } => {
                    users.reset_password(*id, password).await?;
                    tracing::info!("✅ Password reset for user {}", id);
                    writeln!(out, "true")?;
                    Ok(())
                }
            }
        }
        Command::Store { .. } => Ok(()),
    }
}

pub async fn run_resource<R: Resource, W: Write>(
    client: &ResourceClient<R>,
    action: &ResourceAction,
    out: &mut W,
) -> Result<()> {
    match action {
        ResourceAction::List { format } => {
            let records = client.get_all().await?;
            tracing::info!("📂 Fetched {} {} records", records.len(), R::NAME);
            render_records(&records, *format, out)
        }
        ResourceAction::Get { id } => {
            let record = client.get_by_id(&R::Id::parse_key(id)?).await?;
            render_record(&record, out)
        }
        ResourceAction::ByParent { parent_id, format } => {
            let records = client.get_by_parent(*parent_id).await?;
            tracing::info!(
                "📂 Fetched {} {} records for parent {}",
                records.len(),
                R::NAME,
                parent_id
            );
            render_records(&records, *format, out)
        }
        ResourceAction::Create { file } => {
            let record: R = read_json(file).await?;
            let created = client.create(&record).await?;
            tracing::info!("✅ Created {} record", R::NAME);
            render_record(&created, out)
        }
        ResourceAction::CreateAll { file } => {
            let records: Vec<R> = read_json(file).await?;
            let created = client.create_all(&records).await?;
            tracing::info!("✅ Created {} {} records", created.len(), R::NAME);
            render_record(&created, out)
        }
        ResourceAction::Update { file } => {
            let record: R = read_json(file).await?;
            let updated = client.update(&record).await?;
            tracing::info!("✅ Updated {} record", R::NAME);
            render_record(&updated, out)
        }
        ResourceAction::Delete { id, quiet_failure } => {
            let id = R::Id::parse_key(id)?;
            if *quiet_failure {
                let deleted = client.delete_or_false(&id).await?;
                writeln!(out, "{}", deleted)?;
            } else {
                client.delete(&id).await?;
                tracing::info!("🗑️ Deleted {} {}", R::NAME, id.to_path());
                writeln!(out, "true")?;
            }
            Ok(())
        }
    }
}

pub async fn run_store<S: Storage, W: Write>(
    store: &DivisionStore<S>,
    action: &StoreAction,
    out: &mut W,
) -> Result<()> {
    match action {
        StoreAction::Show => render_record(&store.read().await?, out),
        StoreAction::Set { pairs } => {
            let current = serde_json::to_value(store.read().await?)?;
            let partial = build_partial(&current, pairs);
            let merged: DivisionState = store.merge(&partial).await?;
            render_record(&merged, out)
        }
        StoreAction::Clear => {
            store.clear().await?;
            tracing::info!("🧹 Cleared stored division state");
            Ok(())
        }
    }
}

/// 依目前欄位型別轉換命令列的字串值：字串欄位保持原樣，其餘嘗試解析為 JSON
fn build_partial(current: &Value, pairs: &[(String, String)]) -> Value {
    let mut partial = Map::new();
    for (key, raw) in pairs {
        let value = match current.get(key) {
            Some(Value::String(_)) => Value::String(raw.clone()),
            _ => serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone())),
        };
        partial.insert(key.clone(), value);
    }
    Value::Object(partial)
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&content)?)
}
