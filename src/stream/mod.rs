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

//! Record source for gzip'ed integer-tuple data files.
//!
//! Data files are line oriented: each line carries two whitespace-separated
//! integers, and lines starting with `#` are comments. The reader yields
//! tuples lazily in file order, exactly once; the stream is finite and
//! cannot be restarted. Estimators consume the second tuple field through
//! the [`TupleReader::values`] adaptor.
//!
//! # Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use streamsketch::stream::TupleReader;
//!
//! let data = "# node frequency\n1 5\n2 3\n";
//! let mut reader = TupleReader::new(Cursor::new(data));
//!
//! let first = reader.next().unwrap().unwrap();
//! assert_eq!((first.a, first.b), (1, 5));
//! let second = reader.next().unwrap().unwrap();
//! assert_eq!((second.a, second.b), (2, 3));
//! assert!(reader.next().is_none());
//! ```

mod reader;

pub use reader::IntTuple;
pub use reader::TupleReader;
pub use reader::Values;
pub use reader::open_gzip;
