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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::deck::configure;
use crate::drill::state::ServerState;
use crate::error::Fallible;
use crate::session::Progress;
use crate::session::Session;
use crate::timestamp::Timestamp;

#[derive(Debug, Deserialize)]
enum Action {
    /// Learner-initiated advance.
    Next,
    /// The page countdown reached zero.
    Expire,
    /// A typed response.
    Answer,
    /// Build a fresh deck from the stored config and start over.
    Restart,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    answer: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form.action, form.answer) {
        Ok(_) => {}
        Err(e) => {
            log::error!("error: {e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, action: Action, answer: Option<String>) -> Fallible<()> {
    let mut session = state.session.lock().unwrap();
    let now = Timestamp::now();
    let progress = match action {
        Action::Next => session.skip(now),
        Action::Expire => {
            // A backgrounded tab can post a stale expire; only advance when
            // the card is actually out of time.
            if session.remaining_seconds(now) == 0 {
                session.expire(now)
            } else {
                None
            }
        }
        Action::Answer => {
            session.submit_answer(answer.as_deref().unwrap_or(""));
            None
        }
        Action::Restart => {
            let deck = configure(&state.config, &mut rand::rng())?;
            *session = Session::start(deck, state.config.mode, state.config.limit_seconds, now)?;
            None
        }
    };
    if progress == Some(Progress::Completed) {
        log::debug!("session completed.");
    }
    Ok(())
}
