//! `todo` command line front end.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use todo_client::forms::{SignupForm, TodoForm};
use todo_client::models::{Todo, TodoPatch, TodoStatus};
use todo_client::{ApiClient, AuthState, SessionContext, SessionStorage, TodoStore};

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Manage your todo list from the terminal", version)]
struct Cli {
    /// API base URL. Falls back to `TODO_API_URL`.
    #[arg(long, global = true, value_name = "url")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account; an activation email follows.
    Signup(SignupArgs),
    /// Activate an account with the token from the email.
    Activate { token: String },
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in user.
    Profile,
    /// List all todos.
    List,
    Add(AddArgs),
    Update(UpdateArgs),
    Delete { id: Uuid },
}

#[derive(Debug, Args)]
struct SignupArgs {
    #[arg(long)]
    personal_id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    user_image: Option<String>,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    desc: String,
    /// `active` or `completed`.
    #[arg(long)]
    status: Option<TodoStatus>,
    #[arg(long)]
    image: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    id: Uuid,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    desc: Option<String>,
    #[arg(long)]
    status: Option<TodoStatus>,
    #[arg(long, conflicts_with = "clear_image")]
    image: Option<String>,
    /// Remove the image.
    #[arg(long)]
    clear_image: bool,
}

impl From<SignupArgs> for SignupForm {
    fn from(args: SignupArgs) -> Self {
        Self {
            personal_id: args.personal_id,
            name: args.name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            address: args.address,
            phone_number: args.phone_number,
            user_image: args.user_image,
        }
    }
}

impl From<UpdateArgs> for TodoPatch {
    fn from(args: UpdateArgs) -> Self {
        let todo_image = if args.clear_image {
            Some(None)
        } else {
            args.image.map(Some)
        };
        Self {
            todo_name: args.name,
            todo_desc: args.desc,
            todo_status: args.status,
            todo_image,
        }
    }
}

fn print_todo(todo: &Todo) {
    let status = match todo.todo_status {
        TodoStatus::Active => "active",
        TodoStatus::Completed => "completed",
    };
    println!("{}  [{status}]  {}", todo.id, todo.todo_name);
    println!("    {}", todo.todo_desc);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let api = match cli.api_url {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    }
    .context("failed to build HTTP client")?;
    let storage = SessionStorage::from_env().context("failed to locate session storage")?;
    let mut auth = AuthState::restore(storage.load());
    let mut todos = TodoStore::default();

    match cli.command {
        Command::Signup(args) => {
            auth.signup(&api, &args.into()).await?;
            println!("{}", auth.message);
        }
        Command::Activate { token } => {
            auth.activate(&api, &token).await?;
            println!("{}", auth.message);
        }
        Command::Signin { email, password } => {
            auth.signin(&api, &storage, &email, &password).await?;
            println!("{}", auth.message);
        }
        Command::Logout => {
            auth.resume(&api, &storage).await;
            auth.logout(&api, &storage).await?;
            println!("{}", auth.message);
        }
        Command::Profile => {
            auth.resume(&api, &storage).await;
            auth.load_profile(&api, &storage).await?;
            match &auth.session {
                SessionContext::Authenticated(user) => {
                    println!("{} <{}>", user.name, user.email);
                    println!("ID:       {}", user.personal_id);
                    println!("Address:  {}", user.address);
                    println!("Phone:    {}", user.phone_number);
                    println!("Joined:   {}", user.joined_at.format("%Y-%m-%d"));
                }
                SessionContext::Anonymous => bail!("Not signed in"),
            }
        }
        Command::List => {
            todos.load(&api).await?;
            if todos.todos().is_empty() {
                println!("No tasks yet.");
            }
            for todo in todos.todos() {
                print_todo(todo);
            }
        }
        Command::Add(args) => {
            let form = TodoForm {
                todo_name: args.name,
                todo_desc: args.desc,
                todo_status: args.status,
                todo_image: args.image,
            };
            let todo = todos.add(&api, &form).await?;
            println!("{}", todos.message());
            print_todo(&todo);
        }
        Command::Update(args) => {
            let id = args.id;
            let todo = todos.update(&api, id, &args.into()).await?;
            println!("{}", todos.message());
            print_todo(&todo);
        }
        Command::Delete { id } => {
            todos.delete(&api, id).await?;
            println!("{}", todos.message());
        }
    }

    Ok(())
}
