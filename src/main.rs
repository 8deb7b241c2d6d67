use clap::Parser;
use neis_timetable::utils::validation::{self, Validate};
use neis_timetable::utils::{error::Result, logger};
use neis_timetable::{CliConfig, NeisClient, School, TimetableQuery};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api_key = config.resolved_api_key();
    if api_key.is_none() {
        tracing::warn!("NEIS_API_KEY is not set; lookups will fail until it is provided");
        eprintln!("⚠️  NEIS_API_KEY가 설정되지 않았습니다. 조회 시 오류가 발생합니다.");
    }

    let client = NeisClient::new(config.base_url.clone(), api_key, None)?;

    let name = prompt_non_empty("학교 이름을 입력하세요: ")?;
    let schools = match client.search_school(&name).await {
        Ok(schools) => schools,
        Err(e) => {
            tracing::error!("school search failed: {}", e);
            eprintln!("❌ 학교 검색 중 오류가 발생했습니다: {}", e);
            std::process::exit(1);
        }
    };

    if schools.is_empty() {
        println!("데이터가 없습니다");
        return Ok(());
    }

    for (i, school) in schools.iter().enumerate() {
        println!(
            "{}. 학교명: {} 학교종류: {} 주소: {}",
            i + 1,
            school.name,
            school.kind,
            school.road_address
        );
    }

    let school = prompt_selection(&schools)?;

    let grade = prompt_validated("학년을 입력하세요 (1-6): ", |value| {
        validation::validate_grade("grade", value)
    })?;
    let class_name = prompt_validated("반을 입력하세요 (숫자): ", |value| {
        validation::validate_all_digits("class", value)
    })?;
    let date = prompt_validated("날짜를 입력하세요 (YYYYMMDD): ", |value| {
        validation::validate_date_yyyymmdd("date", value)
    })?;

    let query = match TimetableQuery::from_school(school, grade, class_name, date) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("❌ '{}' 종류의 학교는 시간표 조회를 지원하지 않습니다.", school.kind);
            tracing::debug!("query construction failed: {}", e);
            std::process::exit(1);
        }
    };

    match client.timetable(&query).await {
        Ok(entries) if entries.is_empty() => println!("데이터가 없습니다"),
        Ok(entries) => {
            for entry in entries {
                println!("{}교시: {}", entry.period, entry.subject);
            }
        }
        Err(e) => {
            tracing::error!("timetable lookup failed: {}", e);
            eprintln!("❌ 시간표 조회 중 오류가 발생했습니다: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_non_empty(prompt: &str) -> io::Result<String> {
    loop {
        let value = read_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("값을 입력해주세요.");
    }
}

/// Re-prompts until the validator accepts the input; retries are unbounded.
fn prompt_validated<F>(prompt: &str, validate: F) -> io::Result<String>
where
    F: Fn(&str) -> Result<()>,
{
    loop {
        let value = read_line(prompt)?;
        match validate(&value) {
            Ok(()) => return Ok(value),
            Err(e) => {
                tracing::debug!("rejected input: {}", e);
                println!("잘못된 입력입니다. 다시 입력해주세요.");
            }
        }
    }
}

fn prompt_selection<'a>(schools: &'a [School]) -> io::Result<&'a School> {
    loop {
        let value = read_line("조회할 학교 번호를 선택하세요: ")?;
        match value.parse::<usize>() {
            Ok(n) if (1..=schools.len()).contains(&n) => return Ok(&schools[n - 1]),
            _ => println!(
                "1부터 {} 사이의 번호를 입력해주세요.",
                schools.len()
            ),
        }
    }
}
