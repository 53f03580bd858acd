//! Error handling and exit codes.

use bigmul_cli::ui;
use bigmul_core::constants::exit_codes;
use bigmul_core::CodecError;

/// Map a codec error to its exit code.
pub fn handle_error(err: &CodecError) -> i32 {
    match err {
        CodecError::InvalidOperand(_)
        | CodecError::ModularInverseUndefined { .. }
        | CodecError::Calculation(_) => exit_codes::ERROR_GENERIC,
        CodecError::Config(_) => exit_codes::ERROR_CONFIG,
        CodecError::DecodeFormat { .. } => exit_codes::ERROR_DECODE,
        CodecError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Print `err` and return the exit code for it.
pub fn report(err: &anyhow::Error) -> i32 {
    ui::print_error(&format!("{err:#}"));
    err.downcast_ref::<CodecError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&CodecError::Mismatch), 3);
        assert_eq!(handle_error(&CodecError::Config("bad".into())), 4);
        assert_eq!(
            handle_error(&CodecError::DecodeFormat {
                token: "zz".into(),
                reason: "not hexadecimal",
            }),
            5
        );
        assert_eq!(handle_error(&CodecError::InvalidOperand("x".into())), 1);
    }

    #[test]
    fn failures_never_exit_with_success() {
        assert_eq!(exit_codes::SUCCESS, 0);
        for err in [
            CodecError::Mismatch,
            CodecError::Config("bad".into()),
            CodecError::Calculation("failed".into()),
        ] {
            assert_ne!(handle_error(&err), exit_codes::SUCCESS);
        }
    }

    #[test]
    fn report_downcasts() {
        let err = anyhow::Error::new(CodecError::Mismatch);
        assert_eq!(report(&err), 3);

        let err = anyhow::Error::new(CodecError::Config("bad".into())).context("selecting");
        assert_eq!(report(&err), 4);

        assert_eq!(report(&anyhow::anyhow!("disk full")), 1);
    }
}
