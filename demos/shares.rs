#[macro_use]
extern crate log;

use argh::FromArgs;

use samba_client::{SambaClient, SmbOptions};

#[derive(FromArgs)]
#[argh(description = "
where positional is the share address: //server/share or \\\\server\\share

Lists the shares of the network with --shares, otherwise the files matching <prefix>*<suffix>")]
struct Args {
    #[argh(option, short = 'P', description = "specify password")]
    password: Option<String>,
    #[argh(switch, description = "prompt for password")]
    ask_password: bool,
    #[argh(
        option,
        short = 'u',
        default = r#""guest".to_string()"#,
        description = "specify username"
    )]
    username: String,
    #[argh(option, short = 'w', description = "specify workgroup")]
    workgroup: Option<String>,
    #[argh(option, short = 'p', description = "specify port")]
    port: Option<u16>,
    #[argh(switch, description = "list shares instead of files")]
    shares: bool,
    #[argh(
        option,
        default = "String::new()",
        description = "file name prefix to list"
    )]
    prefix: String,
    #[argh(
        option,
        default = "String::new()",
        description = "file name suffix to list"
    )]
    suffix: String,
    #[argh(positional, description = "share address")]
    address: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder().try_init()?;
    let args: Args = argh::from_env();
    let password = match (&args.password, args.ask_password) {
        (Some(p), _) => Some(p.clone()),
        (None, true) => Some(read_secret_from_tty("Password: ")?),
        (None, false) => None,
    };

    let client = init_client(&args, password);

    if args.shares {
        info!("listing shares...");
        for share in client.get_all_shares()? {
            println!("{}", share);
        }
        return Ok(());
    }

    info!(
        "listing files matching {}*{} at {}",
        args.prefix, args.suffix, args.address
    );
    for file in client.list_files(&args.prefix, &args.suffix)? {
        println!("{}", file);
    }

    Ok(())
}

fn init_client(args: &Args, password: Option<String>) -> SambaClient {
    info!(
        "initializing client for {} with username {}",
        args.address, args.username
    );
    let mut options = SmbOptions::new(&args.address).username(&args.username);
    if let Some(password) = password {
        options = options.password(password);
    }
    if let Some(workgroup) = args.workgroup.as_deref() {
        options = options.domain(workgroup);
    }
    if let Some(port) = args.port {
        options = options.port(port);
    }
    SambaClient::new(options)
}

/// Read a secret from tty with customisable prompt
fn read_secret_from_tty(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}
