//! # Checkout Signature Verification
//!
//! Razorpay signs a completed checkout as
//! `hex(HMAC_SHA256(key_secret, "<order_id>|<payment_id>"))`.

use hmac::{Hmac, Mac};
use pay_core::{PaymentConfirmation, PaymentError, PaymentResult};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Error text reported on a signature mismatch
pub const SIGNATURE_MISMATCH: &str = "Razorpay Signature Verification Failed";

/// Compute the expected checkout signature for an order/payment pair
pub fn expected_payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
) -> PaymentResult<String> {
    let message = format!("{}|{}", order_id, payment_id);
    compute_hmac_sha256(secret, &message)
}

/// Check a checkout confirmation against the key secret
pub fn verify_payment_signature(
    secret: &str,
    confirmation: &PaymentConfirmation,
) -> PaymentResult<()> {
    let expected =
        expected_payment_signature(secret, &confirmation.order_id, &confirmation.payment_id)?;

    if !constant_time_compare(&expected, &confirmation.signature) {
        return Err(PaymentError::SignatureVerificationFailed(
            SIGNATURE_MISMATCH.to_string(),
        ));
    }

    Ok(())
}

fn compute_hmac_sha256(secret: &str, message: &str) -> PaymentResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PaymentError::Configuration(format!("Invalid HMAC key: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
