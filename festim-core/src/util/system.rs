//! Process-wide resource decisions: how many CPU threads to use and how
//! many accelerators are available.
//!
//! The thread count is decided once per process and then cached. Later
//! calls return the cached decision, and asking for a *different* limit
//! afterwards is an error, since thread pools sized from the first decision
//! may already exist.

use std::fmt::Debug;
use std::sync::{RwLock, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::error::FestimError;

/// Environment variable through which users can cap the thread count.
pub const FE_NUM_THREADS: &str = "FE_NUM_THREADS";

static THREAD_LIMIT: Lazy<RwLock<Option<usize>>> = Lazy::new(|| RwLock::new(None));

static ACCELERATOR_PROBE: Lazy<RwLock<Box<dyn AcceleratorProbe>>> =
    Lazy::new(|| RwLock::new(Box::new(CpuOnlyProbe)));

/// Reports how many accelerators the process can use.
pub trait AcceleratorProbe: Debug + Send + Sync {
    fn device_count(&self) -> usize;
}

/// Probe for hosts without accelerators. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuOnlyProbe;

impl AcceleratorProbe for CpuOnlyProbe {
    fn device_count(&self) -> usize {
        0
    }
}

/// Probe returning a fixed count, for hosts where the count is known up front.
#[derive(Debug, Clone, Copy)]
pub struct FixedDeviceCount(pub usize);

impl AcceleratorProbe for FixedDeviceCount {
    fn device_count(&self) -> usize {
        self.0
    }
}

/// Installs the probe used by [`get_num_devices`].
pub fn set_accelerator_probe(probe: Box<dyn AcceleratorProbe>) {
    let mut guard = ACCELERATOR_PROBE.write().unwrap_or_else(|poisoned| {
        log::warn!("RwLock for accelerator probe was poisoned. Recovering write guard.");
        poisoned.into_inner()
    });
    log::debug!("Accelerator probe set to {:?}", probe);
    *guard = probe;
}

/// Number of devices to spread work over: the accelerator count, or 1 when
/// there are none. Never returns 0.
pub fn get_num_devices() -> usize {
    let guard = ACCELERATOR_PROBE.read().unwrap_or_else(|poisoned| {
        log::warn!("RwLock for accelerator probe was poisoned. Recovering read guard.");
        poisoned.into_inner()
    });
    guard.device_count().max(1)
}

/// Number of usable CPU cores, honoring the process affinity mask where the
/// platform exposes it.
pub fn available_cores() -> usize {
    match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            log::warn!("Could not determine available parallelism ({}), assuming 1 core", e);
            1
        }
    }
}

/// Determines the number of CPU threads the process should use.
///
/// Resolution order:
/// 1. a decision cached by an earlier call is returned as is;
/// 2. otherwise the core count is clamped by `limit` and then by
///    `FE_NUM_THREADS`, and the result is cached.
///
/// `limit` can only lower the thread count, never raise it. A `limit` (or
/// environment value) of 0 counts as unset.
///
/// # Errors
/// * `FestimError::ThreadLimitConflict` if `limit` differs from a cached decision.
/// * `FestimError::EnvParse` if `FE_NUM_THREADS` is not an integer.
/// * `FestimError::NoCores` if the resolved count is below 1.
pub fn cpu_count(limit: Option<usize>) -> Result<usize, FestimError> {
    let env_limit = std::env::var(FE_NUM_THREADS).ok();
    resolve_cpu_count(limit, env_limit.as_deref(), available_cores())
}

/// The cached thread decision, if one has been made.
pub fn configured_thread_limit() -> Option<usize> {
    *THREAD_LIMIT.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Forgets the cached thread decision so tests can exercise fresh resolutions.
pub fn reset_for_testing() {
    *write_thread_limit() = None;
}

fn write_thread_limit() -> RwLockWriteGuard<'static, Option<usize>> {
    THREAD_LIMIT.write().unwrap_or_else(|poisoned| {
        log::warn!("RwLock for thread limit was poisoned. Recovering write guard.");
        poisoned.into_inner()
    })
}

pub(crate) fn resolve_cpu_count(
    limit: Option<usize>,
    env_limit: Option<&str>,
    cores: usize,
) -> Result<usize, FestimError> {
    // Held for the whole resolution so racing first calls serialize
    let mut guard = write_thread_limit();
    let limit = limit.filter(|&l| l > 0);

    if let Some(existing) = *guard {
        if let Some(requested) = limit {
            if requested != existing {
                return Err(FestimError::ThreadLimitConflict { requested, existing });
            }
        }
        return Ok(existing);
    }

    let env_limit = parse_env_limit(env_limit)?;
    let mut resolved = cores as i64;
    if let Some(l) = limit {
        resolved = resolved.min(l as i64);
    }
    if let Some(e) = env_limit {
        resolved = resolved.min(e);
    }
    if resolved < 1 {
        return Err(FestimError::NoCores(resolved));
    }

    let resolved = resolved as usize;
    *guard = Some(resolved);
    log::info!(
        "Using {} cpu thread(s) (cores: {}, limit: {:?}, {}: {:?})",
        resolved,
        cores,
        limit,
        FE_NUM_THREADS,
        env_limit
    );
    Ok(resolved)
}

fn parse_env_limit(raw: Option<&str>) -> Result<Option<i64>, FestimError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let value: i64 = raw.parse().map_err(|_| FestimError::EnvParse {
        name: FE_NUM_THREADS.to_string(),
        value: raw.to_string(),
    })?;
    Ok(if value == 0 { None } else { Some(value) })
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;
