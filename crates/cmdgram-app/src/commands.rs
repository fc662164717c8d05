//! Commands offered by the terminal host: help, whoami, socials.

use std::rc::Rc;

use cmdgram_terminal::{CommandDispatcher, NodeBuilder, StringArgumentType};
use cmdgram_types::config::{ShellConfig, SocialLink};
use cmdgram_types::error::Result;

/// Register every host command on `dispatcher`.
pub fn register_commands(dispatcher: &mut CommandDispatcher, config: &ShellConfig) -> Result<()> {
    dispatcher.register(help_command())?;
    dispatcher.register(whoami_command(config.about.clone()))?;
    dispatcher.register(socials_command(config.socials.clone()))?;
    Ok(())
}

fn help_command() -> NodeBuilder {
    NodeBuilder::literal("help")
        .description("displays help about a command or all commands")
        .add_child(
            NodeBuilder::argument("command", StringArgumentType::new().allow_commands())
                .description("the command to get help for")
                .optional()
                .executes(|ctx| {
                    let name = ctx.get_string("command");
                    ctx.send_output(&ctx.dispatcher().help_string(name));
                }),
        )
        .executes(|ctx| ctx.send_output(&ctx.dispatcher().help_string(None)))
}

fn whoami_command(about: String) -> NodeBuilder {
    NodeBuilder::literal("whoami")
        .description("Displays who tympanicblock61 is :)")
        .executes(move |ctx| ctx.send_output(&about))
}

fn socials_command(socials: Vec<SocialLink>) -> NodeBuilder {
    let socials = Rc::new(socials);
    let names: Vec<String> = socials.iter().map(|s| s.name.clone()).collect();
    let one = Rc::clone(&socials);
    NodeBuilder::literal("socials")
        .description("Lists the socials i have")
        .add_child(
            NodeBuilder::argument("social", StringArgumentType::new().allow_list(names))
                .description("the social you want to see")
                .optional()
                .executes(move |ctx| {
                    let Some(name) = ctx.get_string("social") else {
                        return;
                    };
                    if let Some(link) = one.iter().find(|s| s.name == name) {
                        ctx.send_output(&format!("{}: {}", link.name, link.url));
                    }
                }),
        )
        .executes(move |ctx| {
            let lines: Vec<String> = socials
                .iter()
                .map(|s| format!("{}: {}", s.name, s.url))
                .collect();
            ctx.send_output(&lines.join("\n"));
        })
}
