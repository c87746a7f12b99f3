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

use std::sync::Arc;
use std::sync::Mutex;

use crate::deck::DrillConfig;
use crate::session::Session;

/// Shared server state. The session engine is single-owner by contract, so
/// every handler takes the mutex and performs one operation per acquisition.
#[derive(Clone)]
pub struct ServerState {
    /// The configuration the session was built from; restarts rebuild a deck
    /// out of it.
    pub config: DrillConfig,
    pub session: Arc<Mutex<Session>>,
}
