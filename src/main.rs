//! kstring - 한글 자모 검색/분해 명령행 도구

use clap::{Parser, Subcommand};
use kstring::config::load_config;
use kstring::matcher::{contains_with, equals_with, index_of_with, matches_with, ComparatorKind};
use kstring::{append_josa_type, extract_choseong, separate, Josa};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kstring", about = "한글 자모 단위 검색과 분해")]
struct Cli {
    /// 비교기 (jamo, choseong, jungseong). 생략하면 설정 파일 값 사용
    #[arg(long, global = true)]
    comparator: Option<ComparatorKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 낱자로 분해: 한글 → ㅎㅏㄴㄱㅡㄹ
    Separate { text: String },
    /// 초성 추출: 한글초성 → ㅎㄱㅊㅅ
    Choseong { text: String },
    /// 검색어가 처음 일치하는 문자 위치 (없으면 -1)
    IndexOf { text: String, keyword: String },
    /// 검색어 포함 여부
    Contains { text: String, keyword: String },
    /// 전체 일치 여부 (길이가 같아야 함)
    Equals { text: String, keyword: String },
    /// 일치한 원문 조각 출력 (없으면 종료 코드 1)
    Matches { text: String, keyword: String },
    /// 받침에 맞는 조사 붙이기 (예: 을, 이, 와, 으로)
    Josa { word: String, josa: Josa },
}

fn main() -> ExitCode {
    let config = load_config();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let cli = Cli::parse();
    let kind = cli.comparator.unwrap_or(config.comparator);
    let cmp = kind.comparator();
    log::debug!("비교기: {:?}", kind);

    match cli.command {
        Command::Separate { text } => println!("{}", separate(&text)),
        Command::Choseong { text } => println!("{}", extract_choseong(&text)),
        Command::IndexOf { text, keyword } => match index_of_with(&text, &keyword, cmp) {
            Some(index) => println!("{}", index),
            None => println!("-1"),
        },
        Command::Contains { text, keyword } => {
            println!("{}", contains_with(&text, &keyword, cmp))
        }
        Command::Equals { text, keyword } => println!("{}", equals_with(&text, &keyword, cmp)),
        Command::Matches { text, keyword } => match matches_with(&text, &keyword, cmp) {
            Some(found) => println!("{}", found),
            None => {
                log::info!("'{}'에서 '{}'를 찾지 못함", text, keyword);
                return ExitCode::FAILURE;
            }
        },
        Command::Josa { word, josa } => println!("{}", append_josa_type(&word, josa)),
    }

    ExitCode::SUCCESS
}
