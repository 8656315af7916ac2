use std::{thread, time::Duration};

use clap::Parser;
use crossbeam_channel::Receiver;
use wlanps::{
    confirm_frame, ChannelTransport, PsController, PsState, SLEEP_CONFIRM, WAKEUP_CONFIRM,
};

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// negotiate a full power-save cycle against a simulated firmware
    RunDemo,
    /// print the default power-save parameter table
    ShowDefaults,
}

#[derive(clap::Parser, Debug)]
struct Args {
    /// how verbose the program should be
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
    /// whether the program should be silent
    #[clap(short, long)]
    silent: bool,
    /// the action to perform
    #[clap(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    {
        let level_filter = match (args.silent, args.verbose) {
            (true, _) => LevelFilter::Off,
            (false, 0) => LevelFilter::Warn,
            (false, 1) => LevelFilter::Info,
            (false, 2) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        };

        use simplelog::*;
        TermLogger::init(
            level_filter,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .unwrap();
    }

    match args.command {
        Command::ShowDefaults => {
            println!("{:#?}", wlanps::PsParams::default());
        }
        Command::RunDemo => {
            if let Err(err) = run_demo() {
                log::error!("demo failed: {err}");
                std::process::exit(1);
            }
        }
    }
}

/// Drives a full negotiation cycle against a firmware simulator thread.
fn run_demo() -> anyhow::Result<()> {
    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (confirm_tx, confirm_rx) = crossbeam_channel::unbounded();

    // The simulated firmware: applies every request after a short delay
    // and answers with the matching confirmation message.
    thread::spawn(move || {
        for enable in request_rx {
            thread::sleep(Duration::from_millis(50));

            let cfm_type = if enable { SLEEP_CONFIRM } else { WAKEUP_CONFIRM };
            if confirm_tx.send(confirm_frame(cfm_type)).is_err() {
                break;
            }
        }
    });

    let controller = PsController::new(ChannelTransport::new(request_tx));
    controller.set_state_change_handler(Some(Box::new(|old, new| {
        println!("power-save state: {old} => {new}");
    })));

    controller.enable()?;
    pump_confirms(&controller, &confirm_rx, PsState::EnableRequestSent)?;

    // push a larger listen interval while power save stays up
    let mut params = controller.params();
    params.listen_interval = 400;
    controller.set_params(params);

    controller.reconfigure_uapsd()?;

    // the re-assertion provokes two confirmations that match no pending
    // request; feed them through anyway, the controller must ignore them
    for _ in 0..2 {
        let frame = confirm_rx.recv_timeout(Duration::from_millis(500))?;
        controller.handle_confirm_frame(&frame)?;
    }

    controller.disable()?;
    pump_confirms(&controller, &confirm_rx, PsState::DisableRequestSent)?;

    println!("final power-save state: {}", controller.state());

    Ok(())
}

/// Feeds inbound firmware messages to the controller until the state
/// leaves `pending`, the way a real event loop drains the confirmation
/// path.
fn pump_confirms(
    controller: &PsController<ChannelTransport>,
    confirms: &Receiver<[u8; 14]>,
    pending: PsState,
) -> anyhow::Result<()> {
    while controller.state() == pending {
        let frame = confirms.recv_timeout(Duration::from_millis(500))?;
        controller.handle_confirm_frame(&frame)?;
    }

    Ok(())
}
