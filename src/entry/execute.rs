use crate::app::summary::print_report;
use crate::args::TesterArgs;
use crate::error::AppResult;
use crate::http::{ClientSettings, ReqwestTransportFactory, resolve_payload};
use crate::run::{Dispatcher, RunConfig};

pub(super) async fn execute_run(args: TesterArgs) -> AppResult<()> {
    let body = resolve_payload(&args)?;
    let config = RunConfig::from_args(&args, body);
    let dispatcher = Dispatcher::new(ReqwestTransportFactory::new(ClientSettings::from_args(
        &args,
    )));

    let report = dispatcher.run(&config).await?;
    print_report(&report, args.output_format)
}
