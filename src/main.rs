// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand, ValueEnum};
use dashboard::context::Context;
use dashboard::dashboard::{DashboardClient, DashboardConfig};
use dashboard::form::encrypt::NoEncryption;
use dashboard::form::{BackupConfigEditable, normalize_backup_form};
use dashboard::types::v1::backup::JobType;
use dashboard::types::v1::resource::EssentialParameters;
use dashboard::utils::file::load_form;
use serde::Serialize;
use std::time::Duration;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "ob-dash")]
#[command(about = "OceanBase dashboard tenant forms and API CLI", long_about = None)]
#[command(version, long_version = build::CLAP_LONG_VERSION)]
struct Cli {
    /// Dashboard base url. Falls back to OB_DASHBOARD_URL.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[arg(short, long, global = true, value_enum, default_value_t = Output::Json)]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Backup policy forms
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },

    /// Largest tenant unit the selected zones can host
    Resources {
        /// Comma separated zone names
        #[arg(long, value_delimiter = ',', required = true)]
        zones: Vec<String>,

        /// JSON or YAML file holding `obServerResources`
        #[arg(long)]
        essentials: String,
    },

    /// Tenants of the dashboard
    Tenants {
        #[command(subcommand)]
        command: TenantCommands,
    },
}

#[derive(Subcommand)]
enum BackupCommands {
    /// Print the request body of an edit form. Credentials are left as typed.
    Render {
        #[arg(long)]
        form: String,
    },

    /// Print the stored policy as an edit form
    Show {
        #[arg(long)]
        ns: String,
        #[arg(long)]
        name: String,
    },

    /// Tell whether an edit form differs from the stored policy
    Diff {
        #[arg(long)]
        ns: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        form: String,
    },
}

#[derive(Subcommand)]
enum TenantCommands {
    List {
        #[arg(long)]
        obcluster: Option<String>,
    },

    Get {
        #[arg(long)]
        ns: String,
        #[arg(long)]
        name: String,
    },

    /// Recent backup jobs
    Jobs {
        #[arg(long)]
        ns: String,
        #[arg(long)]
        name: String,
        /// FULL, INC, ARCHIVE or CLEAN
        #[arg(long = "type", default_value = "FULL")]
        job_type: JobType,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Serialize)]
struct DiffResult {
    changed: bool,
}

fn emit<T>(output: Output, value: &T) -> Result<(), Box<dyn std::error::Error>>
where
    T: Serialize,
{
    let text = match output {
        Output::Json => serde_json::to_string_pretty(value)?,
        Output::Yaml => serde_yaml_ng::to_string(value)?,
    };
    println!("{}", text);
    Ok(())
}

fn connect(url: Option<String>, timeout: u64) -> Result<Context, Box<dyn std::error::Error>> {
    let config = DashboardConfig::resolve(url)?.with_timeout(Duration::from_secs(timeout));
    Ok(Context::new(DashboardClient::new(&config)?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dashboard::init_tracing();

    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Commands::Backup { command } => match command {
            BackupCommands::Render { form } => {
                let form: BackupConfigEditable = load_form(form).await?;
                emit(output, &normalize_backup_form(&form, &NoEncryption, None)?)?;
            }
            BackupCommands::Show { ns, name } => {
                let ctx = connect(cli.url, cli.timeout)?;
                emit(output, &ctx.load_editable_policy(&ns, &name).await?)?;
            }
            BackupCommands::Diff { ns, name, form } => {
                let form: BackupConfigEditable = load_form(form).await?;
                let ctx = connect(cli.url, cli.timeout)?;
                let changed = ctx.policy_changed(&ns, &name, &form).await?;
                emit(output, &DiffResult { changed })?;
            }
        },
        Commands::Resources { zones, essentials } => {
            let essentials: EssentialParameters = load_form(essentials).await?;
            let ctx = connect(cli.url, cli.timeout)?;
            emit(output, &ctx.max_resources(&zones, &essentials)?)?;
        }
        Commands::Tenants { command } => {
            let ctx = connect(cli.url, cli.timeout)?;
            match command {
                TenantCommands::List { obcluster } => {
                    emit(output, &ctx.client().list_tenants(obcluster.as_deref()).await?)?;
                }
                TenantCommands::Get { ns, name } => {
                    emit(output, &ctx.client().get_tenant(&ns, &name).await?)?;
                }
                TenantCommands::Jobs {
                    ns,
                    name,
                    job_type,
                    limit,
                } => {
                    let jobs = ctx
                        .client()
                        .list_backup_jobs(&ns, &name, job_type, limit)
                        .await?;
                    emit(output, &jobs)?;
                }
            }
        }
    }

    Ok(())
}
