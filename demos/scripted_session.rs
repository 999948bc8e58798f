//! Scripted Session
//!
//! Drives a store the way a view layer would: dispatch actions in response
//! to "user input" and re-render on every notification.
//!
//! Key concepts:
//! - The store is owned by the application root and lent to the view
//! - Subscribers re-render from the state they are handed
//! - Removal with one-step undo behind a banner
//!
//! Run with: RUST_LOG=todo_state=debug cargo run --example scripted_session

use todo_state::core::AppState;
use todo_state::{Action, StoreBuilder};
use tracing_subscriber::EnvFilter;

fn render(state: &AppState) {
    let theme = if state.ui.dark_mode() { "dark" } else { "light" };
    println!("--- [{theme}] ---");
    if let Some(banner) = state.ui.banner() {
        println!("  ! {}", banner.message);
    }
    for todo in state.todos.pending() {
        println!("  [ ] {}", todo.title);
    }
    for todo in state.todos.completed() {
        println!("  [x] {}", todo.title);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Scripted Session Example ===\n");

    let mut store = StoreBuilder::new().max_title_len(Some(40)).build()?;
    store.subscribe(render);

    let milk = store.add("Buy milk")?;
    store.add("Walk dog")?;
    store.toggle(&milk);

    store.remove(&milk);
    store.show_banner("Removed \"Buy milk\"");
    store.undo_last_removal();
    store.dismiss_banner();

    store.dispatch(Action::ToggleDarkMode)?;

    if let Err(err) = store.add("   ") {
        println!("\nRejected: {err}");
    }

    println!("\nApplied actions: {:?}", store.history().actions());
    println!("Snapshot: {}", store.snapshot_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
