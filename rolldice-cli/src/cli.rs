use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const ROLLDICE_VERSION: &str = crate_version!();
const ROLLDICE_ABOUT: &str = crate_description!();
const ROLLDICE_FLAG_S_SHORT: char = 's';
const ROLLDICE_FLAG_S_HELP: &str = "Print each die result and the applied arithmetic";
const ROLLDICE_FLAG_D_SHORT: char = 'd';
const ROLLDICE_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLDICE_DICE_HELP: &str = "Dice strings in the format [#x][#]d[#|%][*#][+#|-#][s#]";

#[derive(Parser, Debug)]
#[command(version = ROLLDICE_VERSION, about = ROLLDICE_ABOUT)]
pub struct Args {
    #[arg(short = ROLLDICE_FLAG_S_SHORT, long, help = ROLLDICE_FLAG_S_HELP, action)]
    pub separate: bool,

    #[arg(short = ROLLDICE_FLAG_D_SHORT, long, help = ROLLDICE_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(help = ROLLDICE_DICE_HELP)]
    pub dice: Vec<String>,
}
