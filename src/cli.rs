// Copyright 2025 Fernando Borretti
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

use crate::deck::DEFAULT_COUNT;
use crate::deck::DEFAULT_LIMIT_SECONDS;
use crate::deck::DrillConfig;
use crate::deck::Mode;
use crate::drill::server::start_server;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill kana cards in the browser.
    Drill {
        /// Leave hiragana out of the pool.
        #[arg(long)]
        no_hiragana: bool,
        /// Leave katakana out of the pool.
        #[arg(long)]
        no_katakana: bool,
        /// Leave the dakuten/handakuten extensions out of the pool.
        #[arg(long)]
        no_voiced: bool,
        /// What each card shows, and how it is answered.
        #[arg(long, value_enum, default_value = "kana")]
        mode: Mode,
        /// Number of cards in the session.
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Seconds per card.
        #[arg(long, default_value_t = DEFAULT_LIMIT_SECONDS)]
        limit: u32,
        /// Port to serve the drill UI on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            no_hiragana,
            no_katakana,
            no_voiced,
            mode,
            count,
            limit,
            port,
        } => {
            let config = DrillConfig {
                include_hiragana: !no_hiragana,
                include_katakana: !no_katakana,
                include_voiced: !no_voiced,
                mode,
                count,
                limit_seconds: limit,
            };
            start_server(config, port).await
        }
    }
}
