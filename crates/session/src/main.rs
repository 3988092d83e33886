use std::io::{self, BufRead, Write};
use std::sync::Arc;

use satchel_actors::ActorRegistry;
use satchel_core::TokenId;
use satchel_events::{EventBus, InMemoryEventBus, Subscription};
use satchel_session::input::{Command, parse_quantity};
use satchel_session::{chat, scene};
use satchel_transfer::{BusNotifier, TransferNotice, TransferService};

fn main() -> anyhow::Result<()> {
    satchel_observability::init();

    let mut registry = scene::demo_registry()?;

    let bus = Arc::new(InMemoryEventBus::new());
    let chat_feed = bus.subscribe();
    let service = TransferService::with_sink(BusNotifier::new(Arc::clone(&bus)));

    tracing::info!(actors = registry.len(), "session ready");
    println!("satchel session (type 'help')");

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };

        match command {
            Command::Actors => list_actors(&registry),
            Command::Inventory(token) => show_inventory(&registry, &token),
            Command::Give {
                giver,
                receiver,
                quantity_raw,
                item,
            } => give(&service, &mut registry, &giver, &receiver, &quantity_raw, &item),
            Command::Help => print_help(),
            Command::Quit => break,
        }

        drain_chat(&chat_feed);
    }

    Ok(())
}

fn list_actors(registry: &ActorRegistry) {
    for actor in registry.iter() {
        println!("{:<20} {}", actor.token(), actor.display_name());
    }
}

fn show_inventory(registry: &ActorRegistry, token: &TokenId) {
    match registry.resolve(token) {
        Some(actor) => {
            if actor.inventory().is_empty() {
                println!("{} carries nothing", actor.display_name());
                return;
            }
            for item in actor.inventory().items() {
                println!("{:>6} x {}", item.quantity(), item.name());
            }
        }
        None => println!("no actor found for token '{token}'"),
    }
}

fn give<S: satchel_transfer::NotificationSink>(
    service: &TransferService<S>,
    registry: &mut ActorRegistry,
    giver: &TokenId,
    receiver: &TokenId,
    quantity_raw: &str,
    item: &str,
) {
    let quantity = match parse_quantity(quantity_raw) {
        Ok(quantity) => quantity,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    match service.transfer(registry, giver, receiver, item, quantity) {
        Ok(receipt) => println!(
            "Transferred {} of '{}' from {} to {}.",
            receipt.quantity, receipt.item, receipt.giver, receipt.receiver
        ),
        Err(err) => {
            tracing::warn!(%giver, %receiver, item, quantity, "transfer rejected: {err}");
            println!("{err}");
        }
    }
}

fn drain_chat(feed: &Subscription<TransferNotice>) {
    while let Ok(notice) = feed.try_recv() {
        tracing::info!("[CHAT] {}", chat::chat_line(&notice));
    }
}

fn print_help() {
    println!("commands:");
    println!("  actors                                   list tokens and actors");
    println!("  inv <token>                              show an actor's inventory");
    println!("  give <giver> <receiver> <qty> <item...>  transfer an item");
    println!("  quit                                     leave the session");
}
