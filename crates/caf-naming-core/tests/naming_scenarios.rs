//! End-to-end naming scenarios.
//!
//! Each scenario mirrors a naming resource declared by infrastructure code:
//! a resource type, a base name and a prefix, generated with the randomized
//! convention unless stated otherwise.

use caf_naming_core::{
    Catalog, Convention, EngineConfig, NamingEngine, NamingRequest, RandomTokenGenerator,
    ResourceTypeRule,
};
use std::sync::Arc;

fn engine() -> NamingEngine {
    NamingEngine::with_builtin_catalog().unwrap()
}

fn rule(engine: &NamingEngine, code: &str) -> ResourceTypeRule {
    engine.catalog().lookup(code).unwrap().clone()
}

fn match_count(rule: &ResourceTypeRule, value: &str) -> usize {
    rule.validation_pattern().find_iter(value).count()
}

/// Generates and checks the properties every randomized name must have.
fn check_random_name(code: &str, name: &str, prefix: &str, expected_prefix: &str) -> String {
    let engine = engine();
    let rule = rule(&engine, code);
    let request = NamingRequest::new(code, name).with_prefix(prefix);
    let result = engine.generate(&request).unwrap();
    let value = result.value;

    assert_eq!(
        value.len(),
        rule.max_length(),
        "{code}: got {value} with {} characters",
        value.len()
    );
    assert!(
        value.starts_with(expected_prefix),
        "{code}: {value} does not start with {expected_prefix}"
    );
    assert_eq!(match_count(&rule, &value), 1, "{code}: {value} did not match once");
    value
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_storage_account() {
    let value = check_random_name("st", "log", "rdmi-", "rdmi");
    assert!(value.contains("log"));
    assert!(!value.contains('-'));
}

#[test]
fn test_automation_account() {
    let value = check_random_name("aaa", "automation", "rdmi-", "rdmi");
    assert!(value.contains("automation"));
}

#[test]
fn test_container_registry() {
    let value = check_random_name("acr", "registry", "rdmi-", "rdmi");
    assert!(value.contains("registry"));
}

#[test]
fn test_resource_group_with_irregular_prefix() {
    let value = check_random_name("rg", "myrg", "(_124)-", "(_124)-");
    assert!(value.contains("myrg"));
}

#[test]
fn test_firewall_keeps_dash() {
    let value = check_random_name("afw", "fire", "rdmi-", "rdmi-");
    assert!(value.contains("fire"));
}

#[test]
fn test_recovery_vault() {
    assert!(check_random_name("asr", "recov", "rdmi-", "rdmi-").contains("recov"));
}

#[test]
fn test_event_hub() {
    assert!(check_random_name("evh", "hub", "rdmi-", "rdmi-").contains("hub"));
}

#[test]
fn test_key_vault() {
    assert!(check_random_name("kv", "passepartout", "rdmi-", "rdmi-").contains("passepartout"));
}

#[test]
fn test_log_analytics() {
    assert!(check_random_name("la", "logs", "rdmi-", "rdmi-").contains("logs"));
}

#[test]
fn test_network_resources() {
    for (code, name) in [
        ("nic", "mynetcard"),
        ("nsg", "sec"),
        ("pip", "pip"),
        ("snet", "snet"),
        ("vnet", "vnet"),
    ] {
        let value = check_random_name(code, name, "rdmi-", "rdmi-");
        assert!(value.contains(name), "{code}: {value} lost {name}");
    }
}

#[test]
fn test_linux_vm() {
    assert!(check_random_name("vml", "linuxVM", "rdmi-", "rdmi-").contains("linuxVM"));
}

#[test]
fn test_windows_vm_name_is_trimmed() {
    let value = check_random_name("vmw", "winVMToolongShouldbetrimmed", "rdmi-", "rdmi-");
    assert_eq!(value, "rdmi-winVMToolo");
}

// ============================================================================
// Properties across the catalog
// ============================================================================

#[test]
fn test_every_type_is_length_exact_and_valid() {
    let engine = engine();
    let long = "longname".repeat(20);
    let names = ["", "a", "web", "My App_01", long.as_str(), "--edge--"];
    let prefixes = ["", "rdmi-", "(_124)-", "Dev"];

    for rule in engine.catalog().iter() {
        for name in names {
            for prefix in prefixes {
                for convention in [Convention::CafRandom, Convention::Random] {
                    let request = NamingRequest::new(rule.code(), name)
                        .with_prefix(prefix)
                        .with_convention(convention);
                    let result = engine.generate(&request).unwrap();
                    assert_eq!(result.value.chars().count(), rule.max_length());
                    assert_eq!(
                        match_count(rule, &result.value),
                        1,
                        "{}: {}",
                        rule.code(),
                        result.value
                    );
                    assert!(engine.validate(rule.code(), &result.value).is_ok());
                }
            }
        }
    }
}

#[test]
fn test_name_kept_when_it_fits() {
    let engine = engine();
    for rule in engine.catalog().iter() {
        let prefix = rule.sanitize("rdmi-");
        let name = "ab";
        if prefix.len() + name.len() < rule.max_length() {
            let request = NamingRequest::new(rule.code(), name).with_prefix("rdmi-");
            let value = engine.generate(&request).unwrap().value;
            assert!(value.starts_with(&prefix), "{}: {value}", rule.code());
            assert!(value.contains(name), "{}: {value}", rule.code());
        }
    }
}

#[test]
fn test_overlong_name_is_truncated_to_exact_length() {
    let engine = engine();
    let name = "a".repeat(200);
    for rule in engine.catalog().iter() {
        let request = NamingRequest::new(rule.code(), name.as_str());
        let value = engine.generate(&request).unwrap().value;
        assert_eq!(value.len(), rule.max_length());
        assert!(engine.validate(rule.code(), &value).is_ok());
    }
}

#[test]
fn test_revalidation_is_idempotent() {
    let engine = engine();
    let result = engine
        .generate(&NamingRequest::new("kv", "vault").with_prefix("dev-"))
        .unwrap();
    for _ in 0..5 {
        assert!(engine.validate("kv", &result.value).is_ok());
    }
}

#[test]
fn test_same_seed_same_name() {
    let engine = engine();
    let request = NamingRequest::new("st", "log").with_prefix("rdmi-");
    let a = engine
        .generate_with(&request, &mut RandomTokenGenerator::seeded(11))
        .unwrap();
    let b = engine
        .generate_with(&request, &mut RandomTokenGenerator::seeded(11))
        .unwrap();
    assert_eq!(a.value, b.value);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_repeated_requests_differ() {
    let engine = engine();
    let request = NamingRequest::new("st", "log").with_prefix("rdmi-");
    let a = engine.generate(&request).unwrap();
    let b = engine.generate(&request).unwrap();
    assert_ne!(a.value, b.value);
}

// ============================================================================
// Deterministic conventions
// ============================================================================

#[test]
fn test_classic_convention() {
    let engine = engine();
    let request = NamingRequest::new("kv", "vault")
        .with_prefix("dev-")
        .with_convention(Convention::CafClassic);
    let result = engine.generate(&request).unwrap();
    assert_eq!(result.value, "dev-kv-vault");
    assert_eq!(result.convention, Convention::CafClassic);
}

#[test]
fn test_classic_convention_trims_to_max() {
    let engine = engine();
    let request = NamingRequest::new("vmw", "application-server")
        .with_prefix("prod")
        .with_convention(Convention::CafClassic);
    let value = engine.generate(&request).unwrap().value;
    assert_eq!(value, "prod-vm-applica");
}

#[test]
fn test_classic_convention_drops_dangling_separator() {
    let engine = engine();
    let request = NamingRequest::new("vmw", "abcdefgh")
        .with_prefix("prod-app")
        .with_convention(Convention::CafClassic);
    let value = engine.generate(&request).unwrap().value;
    assert_eq!(value, "prod-app-vm-abc");

    // the cut lands right after the separator before the name
    let request = NamingRequest::new("vmw", "abc")
        .with_prefix("prod-appsrv")
        .with_convention(Convention::CafClassic);
    let value = engine.generate(&request).unwrap().value;
    assert_eq!(value, "prod-appsrv-vm");
}

#[test]
fn test_passthrough_convention() {
    let engine = engine();
    let request = NamingRequest::new("st", "My_Storage-Account")
        .with_prefix("ignored")
        .with_convention(Convention::Passthrough);
    assert_eq!(engine.generate(&request).unwrap().value, "mystorageaccount");
}

#[test]
fn test_passthrough_too_short_is_illegal() {
    let engine = engine();
    for (code, name) in [("st", "ab"), ("kv", "ab"), ("aaa", "abc")] {
        let request = NamingRequest::new(code, name).with_convention(Convention::Passthrough);
        let err = engine.generate(&request).unwrap_err();
        assert!(err.is_illegal_prefix_or_name(), "{code}: {err}");
        assert!(!err.is_exhausted());
    }
}

#[test]
fn test_huge_filler_length_is_bounded() {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let config = EngineConfig::builder().filler_length(usize::MAX).build();
    let engine = NamingEngine::new(catalog, config).unwrap();
    let request = NamingRequest::new("st", "log").with_prefix("rdmi-");
    let value = engine.generate(&request).unwrap().value;
    assert_eq!(value.len(), 24);
    assert!(value.starts_with("rdmilog"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_resource_type() {
    let err = engine().generate(&NamingRequest::new("nope", "x")).unwrap_err();
    assert!(err.is_unknown_resource_type());
}

#[test]
fn test_prefix_longer_than_max() {
    let request = NamingRequest::new("kv", "x").with_prefix("abcdefghijklmnopqrstuvwxyz");
    let err = engine().generate(&request).unwrap_err();
    assert!(err.is_illegal_prefix_or_name());
}

#[test]
fn test_prefix_shrinks_below_max_after_sanitization() {
    let request = NamingRequest::new("st", "x").with_prefix("a-b-c-d-e-f-g-h-i-j-k-l-m");
    let value = engine().generate(&request).unwrap().value;
    assert!(value.starts_with("abcdefghijklm"));
}

#[test]
fn test_custom_catalog_is_injected() {
    let definitions = caf_naming_core::builtin_definitions()
        .into_iter()
        .filter(|d| d.code == "kv");
    let catalog = Catalog::from_definitions(definitions).unwrap();
    let engine = NamingEngine::new(Arc::new(catalog), EngineConfig::default()).unwrap();
    assert_eq!(engine.catalog().len(), 1);
    assert!(engine.generate(&NamingRequest::new("kv", "vault")).is_ok());
    let err = engine.generate(&NamingRequest::new("st", "log")).unwrap_err();
    assert!(err.is_unknown_resource_type());
}
