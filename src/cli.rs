// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Reference month (defaults to the current month)")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("saldus")
        .about("Meu Saldus: balance, transactions and monthly spending reports")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the local store"))
        .subcommand(
            Command::new("profile")
                .about("User profile")
                .subcommand(
                    Command::new("set-name")
                        .about("Set the display name")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("show").about("Show the profile")),
        )
        .subcommand(
            Command::new("balance")
                .about("Available balance")
                .subcommand(
                    Command::new("set")
                        .about("Set the available balance")
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show balance and latest transactions")
                        .arg(
                            Arg::new("hide")
                                .long("hide")
                                .action(ArgAction::SetTrue)
                                .help("Mask the balance"),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("icon").long("icon").default_value("list")),
                )
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("icons").about("List the available icons")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense (entrada|saida)"),
                        )
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly spending reports")
                .subcommand(
                    Command::new("pie")
                        .about("Spending by category: top 5 plus Other")
                        .arg(month_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("weekly")
                        .about("Spending per week of the month")
                        .arg(month_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("top")
                        .about("Top spending categories")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .default_value("3")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Income, expense and net for the month")
                        .arg(month_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(month_arg()),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
