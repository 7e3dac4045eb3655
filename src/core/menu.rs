use crate::config::catalog::{Application, Catalog, Service};
use crate::core::console;
use crate::core::invoker::Invoker;
use crate::utils::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Top-level loop: pick an application, then drive its service menu.
/// Cancelling at this level ends the session.
pub fn run(catalog: &Catalog, invoker: &Invoker) -> Result<()> {
    loop {
        let names: Vec<&str> = catalog
            .applications()
            .iter()
            .map(|a| a.name.as_str())
            .collect();

        match console::select("Select an application", &names)? {
            Some(index) => {
                let application = catalog.application_at(index)?;
                service_menu(application, invoker)?;
            }
            None => break,
        }
    }
    Ok(())
}

fn service_menu(application: &Application, invoker: &Invoker) -> Result<()> {
    if application.service_count() == 0 {
        println!("No services are configured for '{}'.", application.name);
        return Ok(());
    }

    let names: Vec<&str> = application
        .services()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    let prompt = format!("{}: select a service", application.name);

    loop {
        match console::select(&prompt, &names)? {
            Some(index) => {
                let service = application.service_at(index)?;
                invoke_and_report(service, invoker);
                console::pause()?;
            }
            None => return Ok(()),
        }
    }
}

/// Per-request failures are reported to the operator here and never end the
/// interactive session.
fn invoke_and_report(service: &Service, invoker: &Invoker) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Invoking '{}'...", service.name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = invoker.invoke(service);
    spinner.finish_and_clear();

    match outcome {
        Ok(report) => {
            println!();
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("Invocation of '{}' failed: {}", service.name, e);
            eprintln!("❌ {}", e);
        }
    }
}
