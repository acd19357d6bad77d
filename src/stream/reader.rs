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

use std::fmt;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;
use crate::error::ErrorKind;

/// One record of the input stream: a pair of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntTuple {
    pub a: i32,
    pub b: i32,
}

impl fmt::Display for IntTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

/// Lazy reader over a line-oriented integer-tuple stream.
///
/// Yields `Result<IntTuple, Error>` per non-comment line. A line that does
/// not split into exactly two integer fields fails with
/// [`ErrorKind::MalformedRecord`]; read failures of the underlying source
/// fail with [`ErrorKind::Io`]. Iteration stops after the first error, since
/// skipping records would silently bias downstream estimates.
#[derive(Debug)]
pub struct TupleReader<R> {
    reader: R,
    line: String,
    line_number: u64,
    done: bool,
}

impl<R: BufRead> TupleReader<R> {
    /// Wraps a buffered reader positioned at the start of the stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            done: false,
        }
    }

    /// Consumes the reader, yielding only each tuple's second field.
    pub fn values(self) -> Values<R> {
        Values { tuples: self }
    }
}

impl<R: BufRead> Iterator for TupleReader<R> {
    type Item = Result<IntTuple, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(Error::new(
                        ErrorKind::Io,
                        "failed to read from record stream",
                    )
                    .with_context("line", self.line_number)
                    .set_source(err)));
                }
            }
            if self.line.starts_with('#') {
                continue;
            }
            match parse_tuple(&self.line) {
                Ok(tuple) => return Some(Ok(tuple)),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.with_context("line", self.line_number)));
                }
            }
        }
    }
}

fn parse_tuple(line: &str) -> Result<IntTuple, Error> {
    let mut fields = line.split_whitespace();
    let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::new(
            ErrorKind::MalformedRecord,
            "expected exactly two integer fields",
        )
        .with_context("record", line.trim_end()));
    };
    let a = parse_field(first, line)?;
    let b = parse_field(second, line)?;
    Ok(IntTuple { a, b })
}

fn parse_field(field: &str, line: &str) -> Result<i32, Error> {
    field.parse::<i32>().map_err(|err| {
        Error::new(ErrorKind::MalformedRecord, "field is not a 32-bit integer")
            .with_context("record", line.trim_end())
            .set_source(err)
    })
}

/// Iterator over the second field of each tuple.
#[derive(Debug)]
pub struct Values<R> {
    tuples: TupleReader<R>,
}

impl<R: BufRead> Iterator for Values<R> {
    type Item = Result<i32, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tuples.next()?.map(|tuple| tuple.b))
    }
}

/// Opens a gzip'ed tuple file for streaming.
pub fn open_gzip(path: impl AsRef<Path>) -> Result<TupleReader<BufReader<MultiGzDecoder<File>>>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        Error::new(ErrorKind::Io, "failed to open record file")
            .with_context("path", path.display())
            .set_source(err)
    })?;
    Ok(TupleReader::new(BufReader::new(MultiGzDecoder::new(file))))
}
