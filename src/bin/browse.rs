use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use advocates::client::{
    table, ApiClient, ApiClientConfig, FacetOptions, ListController, PageTarget, ScrollAnchor,
};
use advocates::services::advocate_query::SortColumn;

const HELP: &str = "\
commands:
  search [text]        set the search text (optional) and run the search
  degree <x>           toggle a degree filter
  city <x>             toggle a city filter
  specialty <x>        toggle a specialty filter
  min <n> | max <n>    years-of-experience bounds (empty to unset)
  sort <column>        firstName | lastName | city | degree | yearsOfExperience
  page first|prev|next|last|<n>
  size <n>             rows per page
  facets               list available filter values
  filters              show current filters
  clear                reset everything
  quit";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let client = ApiClient::new(ApiClientConfig::from_env());
    let mut controller = ListController::new();

    println!("{HELP}");
    let mut lines = BufReader::new(stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        let ticket = match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "search" => {
                if !arg.is_empty() {
                    controller.filters_mut().search = arg.to_string();
                }
                Some(controller.submit_search())
            }
            "degree" => {
                controller.filters_mut().toggle_degree(arg);
                None
            }
            "city" => {
                controller.filters_mut().toggle_city(arg);
                None
            }
            "specialty" => {
                controller.filters_mut().toggle_specialty(arg);
                None
            }
            "min" => {
                controller.filters_mut().min_experience = arg.to_string();
                None
            }
            "max" => {
                controller.filters_mut().max_experience = arg.to_string();
                None
            }
            "sort" => match SortColumn::from_wire(arg) {
                Some(column) => {
                    let ticket = controller.activate_sort(column, ScrollAnchor::default());
                    if ticket.is_none() {
                        println!("Run a search before sorting.");
                    }
                    ticket
                }
                None => {
                    println!("Unknown column '{arg}'.");
                    None
                }
            },
            "page" => {
                let target = match arg {
                    "first" => Some(PageTarget::First),
                    "prev" | "previous" => Some(PageTarget::Previous),
                    "next" => Some(PageTarget::Next),
                    "last" => Some(PageTarget::Last),
                    n => n.parse().ok().map(PageTarget::Number),
                };
                match target {
                    Some(target) => controller.go_to_page(target),
                    None => {
                        println!("Usage: page first|prev|next|last|<n>");
                        None
                    }
                }
            }
            "size" => match arg.parse() {
                Ok(size) => controller.change_page_size(size),
                Err(_) => {
                    println!("Usage: size <n>");
                    None
                }
            },
            "facets" => {
                let facets: FacetOptions = client.load_facets().await;
                println!("degrees:     {}", facets.degrees.join(", "));
                println!("cities:      {}", facets.cities.join(", "));
                println!("specialties: {}", facets.specialties.join(" | "));
                continue;
            }
            "filters" => {
                println!("{:#?}", controller.filters());
                continue;
            }
            "clear" => {
                controller.clear_filters();
                None
            }
            other => {
                println!("Unknown command '{other}'. Type `help`.");
                continue;
            }
        };

        if let Some(ticket) = ticket {
            client.execute(&mut controller, ticket).await;
        }
        print!("{}", table::render(&controller));
    }
}
