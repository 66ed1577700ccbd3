use libc::{c_char, c_double, c_int, size_t};

use crate::pipeline;

/// Status codes returned by [`process_expression`].
pub const STATUS_OK: c_int = 0;
pub const STATUS_INVALID_ARGUMENT: c_int = -1;
pub const STATUS_LEX_ERROR: c_int = 1;
pub const STATUS_SYNTAX_ERROR: c_int = 2;
pub const STATUS_EVAL_ERROR: c_int = 3;

/// Copy `text` into a caller-provided buffer, truncating it so that the
/// terminating NUL always fits.
///
/// # Safety
///
/// `output` must be null or valid for writes of `output_len` bytes.
unsafe fn fill_buffer(output: *mut c_char, output_len: size_t, text: &str) {
    if output.is_null() || output_len == 0 {
        return;
    }

    let output = std::slice::from_raw_parts_mut(output as *mut u8, output_len);
    let len = text.len().min(output_len - 1);
    output[..len].copy_from_slice(&text.as_bytes()[..len]);
    output[len] = 0;
}

/// Tokenize, convert and evaluate the expression.
///
/// # Arguments
///
/// * `input` - NUL-terminated expression.
/// * `postfix_out` - Buffer for the space-separated postfix form.
/// * `postfix_len` - Length of the postfix buffer.
/// * `trace_out` - Buffer for the trace, one step label per line.
/// * `trace_len` - Length of the trace buffer.
/// * `error_out` - Buffer for the error message.
/// * `error_len` - Length of the error buffer.
/// * `result_out` - Receives the numeric result on success.
///
/// # Returns
///
/// [`STATUS_OK`] on success, otherwise the status of the failing stage. Any
/// output pointer may be null, in which case it is skipped.
///
/// # Safety
///
/// `input` must be null or a valid NUL-terminated string. Each buffer must be
/// null or valid for writes of its declared length, and `result_out` must be
/// null or valid for a single write.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn process_expression(
    input: *const c_char,
    postfix_out: *mut c_char,
    postfix_len: size_t,
    trace_out: *mut c_char,
    trace_len: size_t,
    error_out: *mut c_char,
    error_len: size_t,
    result_out: *mut c_double,
) -> c_int {
    if input.is_null() {
        unsafe {
            fill_buffer(error_out, error_len, "Invalid input string pointer!");
        }
        return STATUS_INVALID_ARGUMENT;
    }

    let input = match unsafe { std::ffi::CStr::from_ptr(input).to_str() } {
        Ok(input) => input,
        Err(_) => {
            unsafe {
                fill_buffer(
                    error_out,
                    error_len,
                    "Failed to convert the input string to a Rust string!",
                );
            }
            return STATUS_INVALID_ARGUMENT;
        }
    };

    let evaluation = pipeline::process(input);

    if let Some(error) = &evaluation.error {
        unsafe {
            fill_buffer(error_out, error_len, &error.to_string());
        }
        return match error {
            pipeline::CalcError::Lex(_) => STATUS_LEX_ERROR,
            pipeline::CalcError::Syntax(_) => STATUS_SYNTAX_ERROR,
            pipeline::CalcError::Eval(_) => STATUS_EVAL_ERROR,
        };
    }

    let trace = evaluation
        .trace
        .iter()
        .map(|line| line.label.as_str())
        .collect::<Vec<&str>>()
        .join("\n");

    unsafe {
        fill_buffer(postfix_out, postfix_len, &evaluation.postfix_text());
        fill_buffer(trace_out, trace_len, &trace);
        fill_buffer(error_out, error_len, "");
        if !result_out.is_null() {
            *result_out = evaluation.result.unwrap_or(f64::NAN);
        }
    }

    STATUS_OK
}
