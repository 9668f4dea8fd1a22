use crate::ai::AiError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::AppError;

#[test]
fn domain_errors_convert_into_app_errors() {
    let de = DomainError::validation(ValidationKind::IllegalHop, "C3 -> C5");
    let app: AppError = de.clone().into();
    assert!(matches!(app, AppError::Domain(ref inner) if *inner == de));
    assert!(!app.is_invariant_violation());
    assert!(app.to_string().contains("IllegalHop"));
}

#[test]
fn invariant_violations_are_flagged() {
    let app: AppError = DomainError::invariant("active piece vanished").into();
    assert!(app.is_invariant_violation());
    assert_eq!(
        app.to_string(),
        "Domain error: invariant violated: active piece vanished"
    );
}

#[test]
fn ai_errors_keep_their_message() {
    let app: AppError = AiError::NoLegalMoves.into();
    assert_eq!(app.to_string(), "AI error: AI has no legal moves");
}

#[test]
fn config_errors_carry_detail() {
    let app = AppError::config("CHECKERS_MODE must be pvp, pvbot or botvbot");
    assert!(app.to_string().starts_with("Configuration error:"));
}

#[test]
fn every_app_error_variant_has_a_prefixed_message() {
    let errors = [
        AppError::from(DomainError::invariant("x")),
        AppError::from(AiError::Internal("x".into())),
        AppError::config("x"),
    ];
    for err in errors {
        let prefix = match &err {
            AppError::Domain(_) => "Domain error: ",
            AppError::Ai(_) => "AI error: ",
            AppError::Config { .. } => "Configuration error: ",
        };
        assert!(err.to_string().starts_with(prefix), "{err}");
    }
}
