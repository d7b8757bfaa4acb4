// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Once-evaluated presence check for the external catalog service.
//!
//! Nothing in this crate touches a [`CatalogRuntime`](crate::catalog::CatalogRuntime) unless the
//! gate has reported the service as present. The probe runs at most once per gate; every later
//! call returns the cached answer, including calls made before the service itself is ready.

use std::fmt;
use std::sync::OnceLock;

type Probe = Box<dyn Fn() -> bool + Send + Sync>;

pub struct AvailabilityGate {
    probe: Probe,
    available: OnceLock<bool>,
}

impl AvailabilityGate {
    pub fn new(probe: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self { probe: Box::new(probe), available: OnceLock::new() }
    }

    /// A gate whose answer is already known (e.g. the host resolved plugin presence itself).
    pub fn fixed(available: bool) -> Self {
        let gate = Self::new(move || available);
        let _ = gate.available.set(available);
        gate
    }

    pub fn is_available(&self) -> bool {
        *self.available.get_or_init(|| {
            let available = (self.probe)();
            tracing::debug!(available, "catalog service presence evaluated");
            available
        })
    }

    /// The cached answer, without running the probe.
    pub fn evaluated(&self) -> Option<bool> {
        self.available.get().copied()
    }
}

impl fmt::Debug for AvailabilityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityGate").field("available", &self.evaluated()).finish()
    }
}
