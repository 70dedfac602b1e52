/// エンティティコレクション
///
/// 同期レイヤーが所有するメモリ上のコレクション。
/// UI側はスナップショットのみを受け取り、直接変更することはできません。
///
/// 更新は常に確定したラウンドトリップ後の全件置き換え（ライトスルー
/// リフレッシュ）で行い、部分的なマージは決して行いません。置き換えが
/// 読み手から見てアトミックであることが、このレイヤー唯一の並行性
/// 安全機構です。
use std::sync::RwLock;

pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// 現在のコレクション内容のスナップショットを取得する
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().unwrap().clone()
    }

    /// コレクション全体を新しい内容に置き換える
    pub fn replace(&self, new_items: Vec<T>) {
        *self.items.write().unwrap() = new_items;
    }

    /// コレクションを空にする（ログアウト時）
    pub fn clear(&self) {
        self.items.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_is_wholesale() {
        let collection = Collection::new();
        collection.replace(vec![1, 2, 3]);
        assert_eq!(collection.snapshot(), vec![1, 2, 3]);

        // 置き換えはマージではなく全件入れ替え
        collection.replace(vec![9]);
        assert_eq!(collection.snapshot(), vec![9]);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let collection = Collection::new();
        collection.replace(vec![1, 2]);

        let mut snapshot = collection.snapshot();
        snapshot.push(3);

        // スナップショットへの変更はコレクションに影響しない
        assert_eq!(collection.snapshot(), vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let collection = Collection::new();
        collection.replace(vec!["a".to_string()]);
        assert!(!collection.is_empty());

        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }
}
