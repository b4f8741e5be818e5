// Copyright 2026 the Pagecurl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo host for the pagecurl crates; see the `examples/` directory of this
//! package for the runnable programs.
