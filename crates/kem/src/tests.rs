// kem/src/tests.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kemlock_api::{Error, KemProvider, PublicBytes, Result, SecretBuffer};
use kemlock_params::KemParams;

use crate::handle::KemHandle;
use crate::registry::{create_kem, describe_algorithm, AlgorithmRegistry, RegistryEntry};

static TEST_PARAMS: KemParams = KemParams {
    identifier: "test-kem",
    public_key_size: 8,
    secret_key_size: 16,
    ciphertext_size: 12,
    shared_secret_size: 4,
};

/// Scripted stand-in for a native provider: counts dispatches, records
/// destruction, and fails on demand after partially filling its
/// outputs.
struct ScriptedProvider {
    dispatches: Arc<AtomicUsize>,
    destroyed: Arc<AtomicUsize>,
    fail: bool,
}

impl ScriptedProvider {
    fn boxed(probe: &Probe, fail: bool) -> Box<dyn KemProvider> {
        Box::new(Self {
            dispatches: Arc::clone(&probe.dispatches),
            destroyed: Arc::clone(&probe.destroyed),
            fail,
        })
    }

    fn outcome(&self, operation: &'static str) -> Result<()> {
        self.dispatches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::ProviderOperation {
                algorithm: "test-kem",
                operation,
            });
        }
        Ok(())
    }
}

impl Drop for ScriptedProvider {
    fn drop(&mut self) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}

impl KemProvider for ScriptedProvider {
    fn generate_keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()> {
        public_key.fill(0xA1);
        secret_key.fill(0xB2);
        self.outcome("generate_keypair")
    }

    fn encapsulate(
        &mut self,
        _public_key: &[u8],
        ciphertext: &mut [u8],
        shared_secret: &mut [u8],
    ) -> Result<()> {
        ciphertext.fill(0xC3);
        shared_secret.fill(0xD4);
        self.outcome("encapsulate")
    }

    fn decapsulate(
        &mut self,
        _secret_key: &[u8],
        _ciphertext: &[u8],
        shared_secret: &mut [u8],
    ) -> Result<()> {
        shared_secret.fill(0xD4);
        self.outcome("decapsulate")
    }
}

#[derive(Default)]
struct Probe {
    dispatches: Arc<AtomicUsize>,
    destroyed: Arc<AtomicUsize>,
}

impl Probe {
    fn handle(&self) -> KemHandle {
        KemHandle::new(&TEST_PARAMS, ScriptedProvider::boxed(self, false))
    }

    fn failing_handle(&self) -> KemHandle {
        KemHandle::new(&TEST_PARAMS, ScriptedProvider::boxed(self, true))
    }

    fn dispatches(&self) -> usize {
        self.dispatches.load(Ordering::SeqCst)
    }

    fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }
}

#[test]
fn outputs_are_sized_from_capability_metadata() {
    let probe = Probe::default();
    let mut handle = probe.handle();

    let (pk, sk) = handle.generate_keypair().unwrap();
    assert_eq!(pk.len(), TEST_PARAMS.public_key_size);
    assert_eq!(sk.len(), TEST_PARAMS.secret_key_size);

    let (ct, ss) = handle.encapsulate(&pk).unwrap();
    assert_eq!(ct.len(), TEST_PARAMS.ciphertext_size);
    assert_eq!(ss.len(), TEST_PARAMS.shared_secret_size);

    let ss2 = handle.decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss2.len(), TEST_PARAMS.shared_secret_size);
}

#[test]
fn operations_after_release_fail() {
    let probe = Probe::default();
    let mut handle = probe.handle();
    let (pk, sk) = handle.generate_keypair().unwrap();
    let (ct, _ss) = handle.encapsulate(&pk).unwrap();

    handle.release().unwrap();
    assert!(!handle.is_live());
    let dispatched_before = probe.dispatches();

    assert!(matches!(
        handle.generate_keypair(),
        Err(Error::HandleReleased {
            operation: "generate_keypair"
        })
    ));
    assert!(matches!(
        handle.encapsulate(&pk),
        Err(Error::HandleReleased {
            operation: "encapsulate"
        })
    ));
    assert!(matches!(
        handle.decapsulate(&sk, &ct),
        Err(Error::HandleReleased {
            operation: "decapsulate"
        })
    ));

    // nothing reached the provider after release
    assert_eq!(probe.dispatches(), dispatched_before);
}

#[test]
fn double_release_is_detected() {
    let probe = Probe::default();
    let mut handle = probe.handle();

    handle.release().unwrap();
    assert!(matches!(
        handle.release(),
        Err(Error::DoubleRelease {
            algorithm: "test-kem"
        })
    ));

    // the provider instance was destroyed exactly once
    assert_eq!(probe.destroyed(), 1);
}

#[test]
fn drop_destroys_a_live_provider_exactly_once() {
    let probe = Probe::default();
    {
        let _handle = probe.handle();
    }
    assert_eq!(probe.destroyed(), 1);

    let mut released = probe.handle();
    released.release().unwrap();
    drop(released);
    assert_eq!(probe.destroyed(), 2);
}

#[test]
fn wrong_length_public_key_never_reaches_the_provider() {
    let probe = Probe::default();
    let mut handle = probe.handle();

    let err = handle
        .encapsulate(&PublicBytes::new(&[0u8; 10]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 8,
            actual: 10,
            ..
        }
    ));
    assert_eq!(probe.dispatches(), 0);
}

#[test]
fn wrong_length_decapsulate_inputs_never_reach_the_provider() {
    let probe = Probe::default();
    let mut handle = probe.handle();

    let good_sk = SecretBuffer::zeroed(TEST_PARAMS.secret_key_size);
    let good_ct = PublicBytes::new(&[0u8; 12]);

    let err = handle
        .decapsulate(&SecretBuffer::zeroed(3), &good_ct)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 16,
            actual: 3,
            ..
        }
    ));

    let err = handle
        .decapsulate(&good_sk, &PublicBytes::new(&[0u8; 11]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 12,
            actual: 11,
            ..
        }
    ));

    assert_eq!(probe.dispatches(), 0);
}

#[test]
fn provider_failure_is_reported_without_retry() {
    let probe = Probe::default();
    let mut handle = probe.failing_handle();

    let err = handle.generate_keypair().unwrap_err();
    assert!(matches!(
        err,
        Error::ProviderOperation {
            algorithm: "test-kem",
            operation: "generate_keypair"
        }
    ));
    assert_eq!(probe.dispatches(), 1);

    // the handle stays live after a failed operation
    assert!(handle.is_live());
}

fn failing_constructor() -> kemlock_api::Result<Box<dyn KemProvider>> {
    Err(Error::ProviderInit {
        algorithm: "test-kem",
        message: "unsupported build configuration".to_string(),
    })
}

static FAILING_ENTRIES: [RegistryEntry; 1] = [RegistryEntry {
    params: &TEST_PARAMS,
    constructor: failing_constructor,
}];

#[test]
fn constructor_failure_surfaces_as_provider_init() {
    let registry = AlgorithmRegistry::new(&FAILING_ENTRIES);
    assert!(matches!(
        registry.create("test-kem"),
        Err(Error::ProviderInit {
            algorithm: "test-kem",
            ..
        })
    ));
    // describe still works; only construction involves the provider
    assert!(registry.describe("test-kem").is_ok());
}

#[test]
fn builtin_registry_describes_what_it_creates() {
    for identifier in AlgorithmRegistry::builtin().identifiers() {
        let described = describe_algorithm(identifier).unwrap();
        let handle = create_kem(identifier).unwrap();
        assert!(std::ptr::eq(described, handle.params()));
        assert!(handle.is_live());
    }
}

#[test]
fn builtin_registry_lists_all_kyber_levels() {
    let identifiers: Vec<_> = AlgorithmRegistry::builtin().identifiers().collect();
    assert_eq!(identifiers, ["kyber-512", "kyber-768", "kyber-1024"]);
}

#[test]
fn unknown_identifiers_are_rejected() {
    assert!(matches!(
        create_kem("nonexistent-algorithm"),
        Err(Error::UnknownAlgorithm { .. })
    ));
    assert!(matches!(
        describe_algorithm(""),
        Err(Error::UnknownAlgorithm { .. })
    ));
}

#[test]
fn handles_can_move_between_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<KemHandle>();

    let probe = Probe::default();
    let mut handle = probe.handle();
    let worker = std::thread::spawn(move || {
        let (pk, _sk) = handle.generate_keypair().unwrap();
        handle.release().unwrap();
        pk.len()
    });
    assert_eq!(worker.join().unwrap(), TEST_PARAMS.public_key_size);
}
