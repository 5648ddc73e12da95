use monkey_lang::runner::run_prompt;

fn main() {
    env_logger::init();
    run_prompt();
}
