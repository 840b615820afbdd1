//! Reader demo entry point.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use scrollsel::config;
use scrollsel::model::AppError;
use scrollsel::state::ReaderState;
use scrollsel::view;
use scrollsel::view_state::blocks_from_text;

/// Scroll-driven sentence selection over a wrapped text list.
#[derive(Parser, Debug)]
#[command(name = "scrollsel")]
#[command(version)]
#[command(about = "Scrolls a text list while highlighting the sentence at the moving selection point")]
struct Args {
    /// Text file to read (blocks split on blank lines); built-in demo text if omitted
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Steady-state selection position in [0, 1]
    #[arg(long)]
    mid: Option<f64>,

    /// Transition curve stiffness in [0, 1] (1 = linear ramp)
    #[arg(long)]
    stiffness: Option<f64>,

    /// Top perception range in rows
    #[arg(long)]
    top_range: Option<i32>,

    /// Bottom perception range in rows
    #[arg(long)]
    bottom_range: Option<i32>,

    /// Path for tracing output (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults -> config file -> CLI flags.
    let config_file = config::load(args.config.clone())?;
    let resolved = config::resolve(
        config_file,
        config::CliOverrides {
            mid: args.mid,
            stiffness: args.stiffness,
            top_range: args.top_range,
            bottom_range: args.bottom_range,
            log_file: args.log_file.clone(),
        },
    )?;

    scrollsel::logging::init(&resolved.log_file_path)?;
    info!(params = ?resolved.params, "configuration resolved");

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_TEXT.to_string(),
    };
    let state = ReaderState::new(blocks_from_text(&text), resolved.params);

    view::run(state)?;
    Ok(())
}

/// Built-in demo paragraphs.
const DEMO_TEXT: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor
incididunt ut labore et dolore magna aliqua. Sed felis eget velit aliquet
sagittis id consectetur purus ut. Volutpat ac tincidunt vitae semper. Nec
sagittis aliquam malesuada bibendum arcu vitae elementum. Volutpat maecenas
volutpat blandit aliquam etiam erat velit scelerisque in. Enim ut sem viverra
aliquet eget sit amet. Sodales neque sodales ut etiam sit amet nisl purus in.
Egestas diam in arcu cursus. Pellentesque pulvinar pellentesque habitant morbi.
Mauris pellentesque pulvinar pellentesque habitant. Faucibus ornare suspendisse
sed nisi lacus sed viverra tellus in. Lectus proin nibh nisl condimentum id
venenatis a. Mi in nulla posuere sollicitudin aliquam ultrices sagittis.
Pharetra vel turpis nunc eget lorem dolor sed viverra. Dui vivamus arcu felis
bibendum ut. Massa enim nec dui nunc mattis enim. Ut porttitor leo a diam
sollicitudin.

Pretium nibh ipsum consequat nisl vel pretium. Lacus vel facilisis volutpat est
velit egestas dui. Elementum sagittis vitae et leo duis. Ultrices gravida
dictum fusce ut placerat. Dignissim sodales ut eu sem integer. Elementum
sagittis vitae et leo. Commodo ullamcorper a lacus vestibulum sed arcu non odio
euismod. Est ullamcorper eget nulla facilisi. Integer eget aliquet nibh
praesent tristique magna sit amet. Nulla pellentesque dignissim enim sit.

Sagittis id consectetur purus ut faucibus pulvinar elementum. Non consectetur a
erat nam at lectus urna duis convallis. At risus viverra adipiscing at in
tellus integer feugiat scelerisque. A erat nam at lectus urna duis. Mollis
aliquam ut porttitor leo a. Curabitur gravida arcu ac tortor dignissim. Ante
metus dictum at tempor. Fringilla ut morbi tincidunt augue interdum velit.
Sagittis orci a scelerisque purus semper. Eleifend mi in nulla posuere
sollicitudin aliquam ultrices sagittis orci. Et ligula ullamcorper malesuada
proin libero nunc consequat interdum varius. Volutpat commodo sed egestas
egestas fringilla phasellus faucibus scelerisque eleifend. Et magnis dis
parturient montes nascetur. Nullam non nisi est sit amet facilisis magna etiam
tempor. Lacus viverra vitae congue eu consequat ac felis donec. Arcu cursus
vitae congue mauris rhoncus aenean. Sapien pellentesque habitant morbi
tristique. Aliquam sem et tortor consequat id porta nibh venenatis. Neque
laoreet suspendisse interdum consectetur libero id faucibus nisl tincidunt.
Dictumst vestibulum rhoncus est pellentesque elit ullamcorper.

Sed sed risus pretium quam vulputate dignissim. Morbi blandit cursus risus at
ultrices. Nisi scelerisque eu ultrices vitae auctor eu augue ut. Hac habitasse
platea dictumst quisque sagittis. Ut ornare lectus sit amet. Varius duis at
consectetur lorem donec massa sapien. Ante metus dictum at tempor commodo
ullamcorper. Vel quam elementum pulvinar etiam. Duis at tellus at urna.
Imperdiet massa tincidunt nunc pulvinar sapien et ligula ullamcorper malesuada.
Quam nulla porttitor massa id neque aliquam vestibulum morbi blandit. Tellus id
interdum velit laoreet id donec ultrices tincidunt. Vitae ultricies leo integer
malesuada nunc. Erat velit scelerisque in dictum non consectetur a erat. Tortor
aliquam nulla facilisi cras. Semper risus in hendrerit gravida. Neque convallis
a cras semper auctor neque vitae. Bibendum enim facilisis gravida neque
convallis. Magna ac placerat vestibulum lectus mauris ultrices eros. Gravida
cum sociis natoque penatibus et magnis.

Egestas erat imperdiet sed euismod nisi porta lorem mollis aliquam. Nunc
pulvinar sapien et ligula ullamcorper malesuada. Metus vulputate eu scelerisque
felis imperdiet proin. Aenean pharetra magna ac placerat vestibulum lectus
mauris ultrices. Id leo in vitae turpis massa sed elementum. Justo donec enim
diam vulputate. Scelerisque in dictum non consectetur. Varius quam quisque id
diam. Amet nulla facilisi morbi tempus iaculis. Enim sit amet venenatis urna.
Orci phasellus egestas tellus rutrum tellus pellentesque eu tincidunt tortor.
Bibendum neque egestas congue quisque egestas diam. Nunc sed id semper risus in
hendrerit gravida. A cras semper auctor neque vitae tempus quam pellentesque
nec. Purus sit amet luctus venenatis lectus magna fringilla urna porttitor.
Gravida arcu ac tortor dignissim convallis aenean et tortor. Urna condimentum
mattis pellentesque id nibh tortor id aliquet lectus. Aliquam purus sit amet
luctus venenatis lectus magna. Suscipit tellus mauris a diam maecenas sed enim.
Est ultricies integer quis auctor elit sed vulputate.";
