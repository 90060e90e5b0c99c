// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! hzresult entry point
//!
//! Decodes raw result words and `2XXX-YYYY` codes, encodes module and
//! description pairs, and lists the module table.

use clap::{Parser, Subcommand};
use hzresult::core::result::ResultCode;
use hzresult::tool::{module_listing, DecodeReport, ToolConfig};
use hzresult::ErrorModule;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hzresult", version, about = "Decode and encode Horizon OS result codes")]
struct Cli {
    /// Tool configuration file
    #[arg(short, long, default_value = "hzresult.toml")]
    config: PathBuf,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode raw words (hex or decimal) or 2XXX-YYYY codes
    Decode {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Pack a module (name or id) and a description
    Encode { module: String, description: u32 },
    /// List known modules
    Modules,
    /// List user ranges from the configuration
    Ranges,
}

fn encode(module: &str, description: u32) -> hzresult::Result<ResultCode> {
    match ErrorModule::parse(module) {
        Some(module) => ResultCode::try_from_parts(
            module.raw() & hzresult::core::result::MAX_MODULE,
            description,
        ),
        None => {
            let id = module
                .parse::<u32>()
                .map_err(|_| hzresult::EmulatorError::UnknownModule(module.to_string()))?;
            ResultCode::try_from_parts(id, description)
        }
    }
}

fn print_report(code: ResultCode, config: &ToolConfig, json: bool) -> hzresult::Result<()> {
    let report = DecodeReport::new(code, config);
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = ToolConfig::load_or_default(&cli.config);
    let json = cli.json || config.json;
    log::debug!("Config: {:?}", config);

    match cli.command {
        Command::Decode { codes } => {
            for input in codes {
                let code: ResultCode = input.parse()?;
                print_report(code, &config, json)?;
            }
        }
        Command::Encode {
            module,
            description,
        } => {
            let code = encode(&module, description)?;
            print_report(code, &config, json)?;
        }
        Command::Modules => {
            for line in module_listing() {
                println!("{}", line);
            }
        }
        Command::Ranges => {
            if config.ranges.is_empty() {
                println!("No user ranges configured in {}", cli.config.display());
            }
            for range in &config.ranges {
                println!(
                    "{:<24} {:>8} {:>4}..={:<4}",
                    range.name, range.module, range.start, range.end
                );
            }
        }
    }

    Ok(())
}
