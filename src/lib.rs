// Copyright 2026 Muvon Un Limited
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

//! Match scraped problem titles and descriptions against the LeetCode catalog.
//!
//! [`matcher::match_title`] and [`matcher::analyze_description`] are pure
//! functions over a [`catalog::Catalog`]; [`catalog::load_catalog`] supplies
//! one from the local snapshot or the remote API.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod formatting;
pub mod logging;
pub mod matcher;
pub mod storage;
