//! Minimal driver for the widget core: a "Save" button whose tracked press
//! simulates slow work, plus an external reset signal.
//!
//! Run with `RUST_LOG=debug` to see the transition log.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use pressable_widget::{
    ActivationEvent, Button, ButtonConfig, PressContext, PressOutcome, ResetController,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ButtonConfig {
        default_text: "Save".to_string(),
        pending_text: Some("Saving…".to_string()),
        fulfilled_text: Some("Saved".to_string()),
        rejected_text: Some("Save failed".to_string()),
        ..Default::default()
    };

    let button = Button::new(config, |ctx: &mut PressContext| {
        println!("handler invoked with value {}", ctx.value());
        PressOutcome::tracked(async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(())
        })
    });

    let (reset_tx, reset_rx) = watch::channel(false);
    let _controller = ResetController::spawn(reset_rx, &button);
    let mut states = button.subscribe();

    println!("label: {}", button.text());
    button.press(&mut ActivationEvent::new());
    println!("label: {} (pending: {})", button.text(), button.is_pending());

    states.borrow_and_update();
    states.changed().await.unwrap();
    println!(
        "label: {} (settled: {}, classes: {:?})",
        button.text(),
        button.is_settled(),
        button.class_list()
    );

    reset_tx.send(true).unwrap();
    states.changed().await.unwrap();
    println!("label after reset: {}", button.text());
}
