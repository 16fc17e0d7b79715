//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정(DB 연결, 스키마 동기화, 시드 데이터)을 단계별로 보여줍니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             Booking Service Backend              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 시작 단계 표시 (`→ Step 1: 데이터베이스 연결`)
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 완료된 단계 표시
///
/// `detail`이 비어 있지 않으면 괄호 안에 덧붙입니다.
///
/// ```text
/// ✓ Step 2: 스키마 동기화 (3 tables)
/// ```
pub fn print_step_complete(step: u8, description: &str, detail: &str) {
    if detail.is_empty() {
        println!("✓ Step {}: {}", step, description);
    } else {
        println!("✓ Step {}: {} ({})", step, description, detail);
    }
}

/// 하위 항목 상태 표시
pub fn print_sub_task(name: &str, status: &str) {
    println!("  ├─ {}: {}", name, status);
}
