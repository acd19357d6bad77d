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

use crate::error::Error;
use crate::error::ErrorKind;

/// Bounded array of maximum-rank registers.
///
/// Registers start at zero and only ever grow: the single mutation primitive
/// is a max-update, which keeps every register monotonically non-decreasing
/// over the estimator's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterArray {
    registers: Vec<u8>,
}

impl RegisterArray {
    /// Creates `num_registers` zeroed registers.
    pub fn new(num_registers: usize) -> Self {
        Self {
            registers: vec![0; num_registers],
        }
    }

    /// Returns the number of registers.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns whether the array holds no registers.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Returns the register at `index`.
    ///
    /// Fails with [`ErrorKind::IndexOutOfRange`] when `index` is outside
    /// `[0, len)`.
    pub fn get(&self, index: usize) -> Result<u8, Error> {
        self.check_index(index)?;
        Ok(self.registers[index])
    }

    /// Raises the register at `index` to `rank` if `rank` is greater.
    ///
    /// Fails with [`ErrorKind::IndexOutOfRange`] when `index` is outside
    /// `[0, len)`.
    pub fn update_max(&mut self, index: usize, rank: u8) -> Result<(), Error> {
        self.check_index(index)?;
        let register = &mut self.registers[index];
        if rank > *register {
            *register = rank;
        }
        Ok(())
    }

    /// Returns the number of registers still at zero.
    pub fn zero_count(&self) -> usize {
        self.registers.iter().filter(|r| **r == 0).count()
    }

    /// Iterates over the register values.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.registers.iter().copied()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.registers.len() {
            return Err(
                Error::new(ErrorKind::IndexOutOfRange, "register index out of range")
                    .with_context("index", index)
                    .with_context("num_registers", self.registers.len()),
            );
        }
        Ok(())
    }
}
