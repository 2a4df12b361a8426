// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Outcome of a membership query against an invertible Bloom structure.
///
/// Unlike a classical Bloom filter's boolean answer, a membership probe here
/// can settle on a definitive positive: a bucket holding exactly one key is
/// ground truth for that key, so a matching probe proves presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainsResult {
    /// The key is definitely not present.
    NotFound,
    /// Every probed bucket is shared by multiple keys; the key may or may
    /// not be present.
    MightExist,
    /// A bucket holding exactly this key was probed; the key is present.
    Exists,
}
