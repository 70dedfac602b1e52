/// 表示コード生成ユーティリティ
///
/// 一覧の並び順から導出されるUI表示専用の連番コードを生成します。
/// コードはフェッチのたびに再計算され、永続化されません。
/// 削除や挿入で値がずれるため、識別子としては常にサーバー採番のidを
/// 使用してください。

/// 表示コードの桁数
pub const CODE_WIDTH: usize = 4;

/// 一覧内の位置（1始まり）からゼロ埋めの表示コードを生成する
///
/// 例: `display_code(1, 4)` → `"0001"`
pub fn display_code(position: usize, width: usize) -> String {
    format!("{position:0width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_display_code_is_zero_padded() {
        assert_eq!(display_code(1, CODE_WIDTH), "0001");
        assert_eq!(display_code(2, CODE_WIDTH), "0002");
        assert_eq!(display_code(42, CODE_WIDTH), "0042");
        assert_eq!(display_code(9999, CODE_WIDTH), "9999");
    }

    #[test]
    fn test_display_code_overflows_width_gracefully() {
        // 桁数を超えた場合は切り詰めずにそのまま表示する
        assert_eq!(display_code(12345, CODE_WIDTH), "12345");
    }

    #[quickcheck]
    fn prop_code_reflects_position_not_identity(positions: Vec<u16>) -> bool {
        // N番目の要素（1始まり）は要素の中身にかかわらず pad(N, width) を受け取る
        positions.iter().enumerate().all(|(idx, _)| {
            let code = display_code(idx + 1, CODE_WIDTH);
            code.parse::<usize>() == Ok(idx + 1) && code.len() >= CODE_WIDTH
        })
    }
}
