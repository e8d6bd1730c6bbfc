use clap::Parser;
use log::debug;

use dqk_log::{debugf, errorf, fatalf, infof, warnf, Builder, Severity};

use cli::Form;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut builder = Builder::new()
        .threshold(args.level)
        .color(args.color)
        .timestamp(!args.no_timestamp);
    if let Some(label) = &args.label {
        builder = builder.label(label.as_str());
    }
    builder.try_init()?;
    dqk_log::install()?;

    debug!("{} message(s) at {}", args.messages.len(), args.severity);

    for message in &args.messages {
        match args.form {
            Form::Emit => dqk_log::default_logger().emit(args.severity, message),
            Form::Method => method(args.severity, message),
            Form::Values => values(args.severity, message),
            Form::Template => template(args.severity, message),
        }
    }

    if let Some(description) = &args.check {
        let outcome = match &args.error {
            Some(err) => Err(err.as_str()),
            None => Ok(()),
        };
        if args.must {
            dqk_log::must(description, &outcome);
        } else {
            dqk_log::check(description, &outcome);
        }
    }

    Ok(())
}

fn method(severity: Severity, message: &str) {
    let logger = dqk_log::default_logger();
    match severity {
        Severity::Fatal => logger.fatal(message),
        Severity::Error => logger.error(message),
        Severity::Warning => logger.warn(message),
        Severity::Info => logger.info(message),
        Severity::Debug => logger.debug(message),
    }
}

fn values(severity: Severity, message: &str) {
    let values: [&dyn std::fmt::Display; 1] = [&message];
    match severity {
        Severity::Fatal => dqk_log::fatal(&values),
        Severity::Error => dqk_log::error_(&values),
        Severity::Warning => dqk_log::warn(&values),
        Severity::Info => dqk_log::info(&values),
        Severity::Debug => dqk_log::debug(&values),
    }
}

fn template(severity: Severity, message: &str) {
    match severity {
        Severity::Fatal => fatalf!("{message}"),
        Severity::Error => errorf!("{message}"),
        Severity::Warning => warnf!("{message}"),
        Severity::Info => infof!("{message}"),
        Severity::Debug => debugf!("{message}"),
    }
}
