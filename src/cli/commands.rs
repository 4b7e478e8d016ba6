//! Command handlers translating shell input into account operations.
//!
//! Arguments may arrive inline (`create 100000000001 Alice S 500`) or, in
//! interactive mode, be collected field by field through the form prompts.
//! Script mode never prompts; missing arguments are a usage error.

use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell::{CliMode, ShellContext};
use crate::errors::{BankError, Result};
use crate::ops;

fn arg_or_prompt<F>(
    context: &ShellContext,
    args: &[&str],
    index: usize,
    usage: &str,
    prompt: F,
) -> Result<String>
where
    F: FnOnce(&ShellContext) -> Result<String>,
{
    if let Some(value) = args.get(index) {
        return Ok((*value).to_string());
    }
    match context.mode {
        CliMode::Interactive => prompt(context),
        CliMode::Script => Err(BankError::Format(format!("usage: {usage}"))),
    }
}

pub fn create(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "create <account-number> <holder> <S|C> <opening-balance>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;
    let holder = arg_or_prompt(context, args, 1, USAGE, |ctx| {
        forms::prompt_holder_name(ctx.theme())
    })?;
    let kind = arg_or_prompt(context, args, 2, USAGE, |ctx| {
        forms::prompt_account_type(ctx.theme())
    })?;
    let balance = arg_or_prompt(context, args, 3, USAGE, |ctx| {
        forms::prompt_balance(ctx.theme(), "Opening balance")
    })?;

    let account = ops::create_account(context.store(), &number, &holder, &kind, &balance)?;
    output::success(format!("Account {} created.", account.number));
    Ok(())
}

pub fn modify(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "modify <account-number> <holder> <S|C> <balance>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;
    let holder = arg_or_prompt(context, args, 1, USAGE, |ctx| {
        forms::prompt_holder_name(ctx.theme())
    })?;
    let kind = arg_or_prompt(context, args, 2, USAGE, |ctx| {
        forms::prompt_account_type(ctx.theme())
    })?;
    let balance = arg_or_prompt(context, args, 3, USAGE, |ctx| {
        forms::prompt_balance(ctx.theme(), "New balance")
    })?;

    let account = ops::modify_account(context.store(), &number, &holder, &kind, &balance)?;
    output::success(format!("Account {} updated.", account.number));
    Ok(())
}

pub fn inquire(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "inquire <account-number>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;

    let account = ops::balance_inquiry(context.store(), &number)?;
    println!("{}", output::account_details(&account));
    Ok(())
}

pub fn deposit(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "deposit <account-number> <amount>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;
    let amount = arg_or_prompt(context, args, 1, USAGE, |ctx| {
        forms::prompt_amount(ctx.theme(), "Deposit amount")
    })?;

    let account = ops::deposit(context.store(), &number, &amount)?;
    output::success(format!(
        "Deposited {} into {}. New balance: {}.",
        amount, account.number, account.balance
    ));
    Ok(())
}

pub fn withdraw(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "withdraw <account-number> <amount>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;
    let amount = arg_or_prompt(context, args, 1, USAGE, |ctx| {
        forms::prompt_amount(ctx.theme(), "Withdrawal amount")
    })?;

    let account = ops::withdraw(context.store(), &number, &amount)?;
    output::success(format!(
        "Withdrew {} from {}. New balance: {}.",
        amount, account.number, account.balance
    ));
    Ok(())
}

pub fn delete(context: &ShellContext, args: &[&str]) -> Result<()> {
    const USAGE: &str = "delete <account-number>";
    let number = arg_or_prompt(context, args, 0, USAGE, |ctx| {
        forms::prompt_account_number(ctx.theme())
    })?;

    ops::delete_account(context.store(), &number)?;
    output::success(format!("Account {number} deleted."));
    Ok(())
}

pub fn list(context: &ShellContext) -> Result<()> {
    let accounts = ops::list_accounts(context.store())?;
    print!("{}", output::accounts_table(&accounts));
    output::info(format!("{} account(s) listed.", accounts.len()));
    Ok(())
}

pub fn help() {
    let lines = [
        "Commands:",
        "  create <number> <holder> <S|C> <balance>   open a new account",
        "  modify <number> <holder> <S|C> <balance>   overwrite an account",
        "  inquire <number>                           show one account",
        "  deposit <number> <amount>                  add to a balance",
        "  withdraw <number> <amount>                 subtract from a balance",
        "  list                                       show every account",
        "  delete <number>                            remove an account",
        "  help                                       show this text",
        "  exit                                       leave the shell",
        "",
        "In interactive mode, omitted fields are prompted for.",
    ];
    for line in lines {
        println!("{line}");
    }
}
