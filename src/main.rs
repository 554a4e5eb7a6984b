// Copyright 2025 Kirky.X
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

use clap::Parser;
use puzzle_shelf::config::settings::Settings;
use puzzle_shelf::infrastructure::database::connection;
use puzzle_shelf::infrastructure::scrapers::jan_van_haasteren::JanVanHaasterenScraper;
use puzzle_shelf::presentation::cli::{Cli, CliContext};
use puzzle_shelf::utils::telemetry;
use std::sync::Arc;
use tracing::{debug, info};

/// 主函数
///
/// 初始化日志、配置与数据库，执行一条命令并以 JSON 输出结果
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    let cli = Cli::parse();

    // 2. Load configuration
    let settings = Settings::new()?;
    debug!("Configuration loaded");

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 4. Initialize components
    let scraper = Arc::new(JanVanHaasterenScraper::new(&settings.scraper)?);
    let context = CliContext::new(db, scraper);
    let identity = cli.identity.resolve(&settings.identity);

    // 5. Run the command
    let output = context.execute(cli.command, identity).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
