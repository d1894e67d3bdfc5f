use crate::prelude::*;

use std::{
    io::{BufRead, Write},
    process::ExitCode,
    sync::Arc,
};

pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

fn load_private_key() -> Result<String, CliError> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {e}"),
    }
    std::env::var(PRIVATE_KEY_ENV).map_err(|_| CliError::MissingPrivateKey)
}

/// Asks the range questions, in order: min amount, max amount, min delay,
/// max delay.
pub fn ask_operator_input<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cli_args: &CliArgs,
) -> Result<OperatorInput, PromptError> {
    let min_amount = prompter.ask_amount("Minimum amount per recipient: ")?;
    let max_amount = prompter.ask_amount("Maximum amount per recipient: ")?;
    let min_delay_secs = prompter.ask_parsed("Minimum delay between transfers (seconds): ")?;
    let max_delay_secs = prompter.ask_parsed("Maximum delay between transfers (seconds): ")?;

    Ok(OperatorInput::builder()
        .recipients_path(cli_args.recipients.clone())
        .audit_log_path(cli_args.log_file.clone())
        .maybe_seed(cli_args.seed)
        .min_amount(min_amount)
        .max_amount(max_amount)
        .min_delay_secs(min_delay_secs)
        .max_delay_secs(max_delay_secs)
        .build())
}

async fn build_executor<L: LedgerClient, R: BufRead, W: Write>(
    command: &Command,
    ledger: Arc<L>,
    prompter: &mut Prompter<R, W>,
) -> Result<AnyTransferExecutor<L>, CliError> {
    let executor = match command {
        Command::Native(args) => {
            NativeTransferExecutor::new(ledger, &args.native_symbol, args.native_decimals).into()
        }
        Command::Token(args) => {
            let contract = match args.contract {
                Some(contract) => contract,
                None => prompter.ask_parsed::<Address>("Token contract address: ")?,
            };
            TokenTransferExecutor::bootstrap(ledger, contract).await?.into()
        }
    };
    Ok(executor)
}

fn log_plan(
    sender: Address,
    session: &BatchSession,
    parameters: &DispatchParameters,
) -> Result<(), CliError> {
    let currency = session.currency();
    let planned_total = total_needed(session.plans(), currency).map_err(Error::from)?;
    info!("👤 Sender: {sender}");
    info!("📋 Recipients: {}", session.recipients().len());
    info!("🎲 Amount range: {} {}", parameters.amount_range(), currency.symbol());
    info!("⏱️ Delay between transfers: {}", parameters.delay_range());
    info!("💸 Planned total: {}", currency.display_base_units(planned_total));
    info!(
        "💰 Current balance: {}",
        currency.display_base_units(session.starting_balance())
    );
    Ok(())
}

async fn run_command<R: BufRead, W: Write>(
    cli_args: CliArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<DispatchReport, CliError> {
    let rpc_url = cli_args.rpc_url()?;
    let private_key = load_private_key()?;
    let ledger = Arc::new(EvmLedger::connect(&rpc_url, &private_key).await?);
    dispatch_batch(&cli_args, ledger, prompter).await
}

/// Everything after connecting: prompts, planning, confirmation and the run.
async fn dispatch_batch<L: LedgerClient, R: BufRead, W: Write>(
    cli_args: &CliArgs,
    ledger: Arc<L>,
    prompter: &mut Prompter<R, W>,
) -> Result<DispatchReport, CliError> {
    let sender = ledger.sender_address();

    let executor = build_executor(&cli_args.command, ledger, prompter).await?;
    let parameters = DispatchParameters::try_from(ask_operator_input(prompter, cli_args)?)?;

    let mut dispatcher = Dispatcher::new(parameters, executor);
    let session = dispatcher.prepare().await?;
    log_plan(sender, &session, dispatcher.parameters())?;

    if !prompter.confirm("Type 'yes' to start sending: ")? {
        return Err(CliError::Declined);
    }
    Ok(dispatcher.run(session).await?)
}

/// Runs the subcommand against stdin/stdout. Any error ends the process with
/// a failure exit code, failed transfers do not.
pub async fn run(cli_args: CliArgs) -> ExitCode {
    exit_code(run_command(cli_args, &mut Prompter::stdio()).await)
}

fn exit_code(outcome: Result<DispatchReport, CliError>) -> ExitCode {
    match outcome {
        Ok(report) => {
            info!(
                "{BINARY_NAME} ran successfully ({} of {} transfers confirmed)",
                report.succeeded(),
                report.results().len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {BINARY_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}
