//! REPL command handlers
//!
//! Session state and the dispatch loop for the interactive prompt. Command
//! failures are printed and the loop continues; only `exit` or end of input
//! ends the session.

use std::collections::HashMap;
use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::ApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::clean_input;

/// One entry of the command table, used for help output.
struct CommandSpec {
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        usage: "help",
        description: "Display a help message",
    },
    CommandSpec {
        usage: "map",
        description: "Display the next page of location areas",
    },
    CommandSpec {
        usage: "mapb",
        description: "Display the previous page of location areas",
    },
    CommandSpec {
        usage: "explore <location-area>",
        description: "Display a list of Pokemon in a location area",
    },
    CommandSpec {
        usage: "catch <pokemon-name>",
        description: "Catch a Pokemon",
    },
    CommandSpec {
        usage: "inspect <pokemon-name>",
        description: "Inspect a caught Pokemon",
    },
    CommandSpec {
        usage: "pokedex",
        description: "List all caught Pokemon",
    },
    CommandSpec {
        usage: "exit",
        description: "Exit the Pokedex",
    },
];

/// Whether the loop should keep reading input after a command.
enum ReplAction {
    Continue,
    Exit,
}

// == Repl ==
/// Interactive session: pagination cursors, the caught-Pokemon map, and the
/// cache-backed API client.
pub struct Repl {
    client: ApiClient,
    /// URL of the next location-area page, None once the listing is exhausted
    next: Option<String>,
    /// URL of the previous location-area page, None on the first page
    previous: Option<String>,
    /// Pokemon caught this session, by name
    pokedex: HashMap<String, Pokemon>,
}

impl Repl {
    /// Creates a session positioned at the first location-area page.
    pub fn new(client: ApiClient) -> Self {
        let next = Some(client.first_page_url());
        Self {
            client,
            next,
            previous: None,
            pokedex: HashMap::new(),
        }
    }

    // == Run Loop ==
    /// Reads commands from stdin until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Pokedex > ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // stdin closed
                break;
            };

            let words = clean_input(&line);
            if words.is_empty() {
                continue;
            }

            match self.dispatch(&words).await {
                Ok(ReplAction::Exit) => break,
                Ok(ReplAction::Continue) => {}
                Err(err) => println!("{err}"),
            }
        }

        Ok(())
    }

    // == Dispatch ==
    async fn dispatch(&mut self, words: &[String]) -> Result<ReplAction> {
        let arg = words.get(1).map(String::as_str);

        match words[0].as_str() {
            "exit" => {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(ReplAction::Exit);
            }
            "help" => self.command_help(),
            "map" => self.command_map().await?,
            "mapb" => self.command_mapb().await?,
            "explore" => {
                let area = arg.ok_or(PokedexError::Usage("explore <location-area>"))?;
                self.command_explore(area).await?;
            }
            "catch" => {
                let name = arg.ok_or(PokedexError::Usage("catch <pokemon-name>"))?;
                self.command_catch(name).await?;
            }
            "inspect" => {
                let name = arg.ok_or(PokedexError::Usage("inspect <pokemon-name>"))?;
                self.command_inspect(name);
            }
            "pokedex" => self.command_pokedex(),
            _ => println!("Unknown command"),
        }

        Ok(ReplAction::Continue)
    }

    // == Help ==
    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in COMMANDS {
            println!("{}: {}", command.usage, command.description);
        }
    }

    // == Map ==
    /// Displays the next page of location areas and advances the cursors.
    pub async fn command_map(&mut self) -> Result<()> {
        let url = self.next.clone().ok_or(PokedexError::LastPage)?;
        let page = self.client.location_page(&url).await?;

        for area in &page.results {
            println!("{}", area.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    // == Map Back ==
    /// Displays the previous page of location areas and rewinds the cursors.
    pub async fn command_mapb(&mut self) -> Result<()> {
        let url = self.previous.clone().ok_or(PokedexError::FirstPage)?;
        let page = self.client.location_page(&url).await?;

        for area in &page.results {
            println!("{}", area.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    // == Explore ==
    /// Lists the Pokemon encountered in a location area.
    pub async fn command_explore(&mut self, area: &str) -> Result<()> {
        let detail = self.client.location_area(area).await?;

        println!("Exploring {}...", area);
        println!("Found Pokemon:");
        for encounter in &detail.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    // == Catch ==
    /// Throws a Pokeball: a roll in 0..100 must beat the Pokemon's base
    /// experience for the catch to land.
    pub async fn command_catch(&mut self, name: &str) -> Result<()> {
        println!("Throwing a Pokeball at {}...", name);

        let pokemon = self.client.pokemon(name).await?;
        let roll: u32 = rand::thread_rng().gen_range(0..100);

        if roll > pokemon.base_experience {
            println!("{} was caught!", name);
            self.pokedex.insert(name.to_string(), pokemon);
        } else {
            println!("{} escaped!", name);
        }
        Ok(())
    }

    // == Inspect ==
    /// Prints the details of a caught Pokemon.
    pub fn command_inspect(&self, name: &str) {
        let Some(pokemon) = self.pokedex.get(name) else {
            println!("you have not caught that pokemon");
            return;
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.type_info.name);
        }
    }

    // == Pokedex ==
    /// Lists every Pokemon caught this session.
    pub fn command_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("Your Pokedex is empty");
            return;
        }

        println!("Your Pokedex:");
        for name in self.pokedex.keys() {
            println!(" - {}", name);
        }
    }

    /// Current forward pagination cursor.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Current backward pagination cursor.
    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Whether a Pokemon with this name has been caught this session.
    pub fn has_caught(&self, name: &str) -> bool {
        self.pokedex.contains_key(name)
    }
}
