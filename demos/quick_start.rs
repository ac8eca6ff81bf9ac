//! Catch-boundary walkthrough: declared contracts, wrapping, and chain
//! diagnostics.

use failchain::prelude::*;

failure_kind!(CONFIG = "config");
failure_kind!(NETWORK = "network");

fn read_setting() -> FailureResult<String> {
    Err(Failure::with_message(&CONFIG, "missing key `listen_addr`"))
}

// Callers of `load` may only see CONFIG failures verbatim; everything else
// comes back wrapped.
fn load() -> FailureResult<String> {
    match read_setting() {
        Ok(value) => Ok(value),
        Err(failure) => {
            rethrow_if_matches(Some(&failure), DeclaredKinds::one(&CONFIG))?;
            wrap_and_rethrow(failure)
        }
    }
}

fn main() {
    if let Err(failure) = load() {
        println!("load failed as {}", failure.kind());
        println!("{}", failure.causal_chain());
    }

    let fetch = Failure::with_cause(
        &NETWORK,
        "profile fetch failed",
        Failure::with_message(&NETWORK, "connection reset"),
    );
    match root_cause(Some(&fetch)) {
        Ok(root) => println!("root cause: {root}"),
        Err(failure) => println!("malformed chain: {failure}"),
    }
}
