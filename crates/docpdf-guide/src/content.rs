//! Guide text. Section order is display order.

pub const DOC_TITLE: &str = "MyResty API Framework";
pub const DOC_TITLE_CN: &str = "MyResty API 框架文档";

/// One numbered chapter of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub title_cn: &'static str,
    pub content: &'static str,
    pub code: Option<&'static str>,
}

pub const SECTIONS: [Section; 8] = [
    Section {
        title: "1. Directory Structure",
        title_cn: "1. 目录结构",
        content: r#"
The project follows a standard CodeIgniter-style directory structure:

项目遵循标准的 CodeIgniter 风格目录结构：
"#,
        code: Some(
            r#"my-resty/
├── app/
│   ├── config/
│   │   └── config.lua          # Main configuration
│   ├── core/
│   │   ├── Config.lua          # Config loader
│   │   ├── Controller.lua      # Base controller
│   │   ├── Model.lua           # Base model
│   │   ├── Request.lua         # Request handler
│   │   ├── Response.lua        # Response handler
│   │   ├── Router.lua          # Router
│   │   └── Loader.lua          # Auto loader
│   ├── controllers/
│   │   ├── welcome.lua         # Welcome controller
│   │   ├── user.lua            # User controller
│   │   └── test.lua            # Test controller
│   ├── models/
│   │   └── user_model.lua      # User model
│   ├── libraries/
│   │   └── redis.lua           # Redis library
│   ├── helpers/
│   │   ├── url_helper.lua      # URL helpers
│   │   └── string_helper.lua   # String helpers
│   ├── routes.lua              # Route definitions
│   └── views/                  # View templates
├── nginx/
│   └── conf/
│       └── nginx.conf          # Nginx config
├── logs/                       # Log files
├── bootstrap.lua               # Entry point
└── README.md"#,
        ),
    },
    Section {
        title: "2. Quick Start",
        title_cn: "2. 快速开始",
        content: r#"
Getting started with MyResty is simple:

开始使用 MyResty 非常简单：

1. Install OpenResty
   安装 OpenResty

2. Configure nginx.conf
   配置 nginx.conf

3. Edit app/config/config.lua
   编辑数据库和Redis配置

4. Start nginx
   启动 nginx
"#,
        code: None,
    },
    Section {
        title: "3. Create Controller",
        title_cn: "3. 创建控制器",
        content: r#"
Controllers handle HTTP requests. Create controllers to define your API endpoints:

控制器处理 HTTP 请求。创建控制器来定义 API 端点：
"#,
        code: Some(
            r#"local Controller = require('app.core.Controller')

local _M = {}

function _M:index()
    self:json({message = 'Hello World'})
end

return _M"#,
        ),
    },
    Section {
        title: "4. Create Model",
        title_cn: "4. 创建模型",
        content: r#"
Models handle database operations. Create models to encapsulate data logic:

模型处理数据库操作。创建模型来封装数据逻辑：
"#,
        code: Some(
            r#"local Model = require('app.core.Model')

local _M = {}

function _M.new()
    local model = Model:new()
    model:set_table('your_table')
    return model
end

return _M"#,
        ),
    },
    Section {
        title: "5. Define Routes",
        title_cn: "5. 定义路由",
        content: r#"
Define routes in app/routes.lua:

在 app/routes.lua 中定义路由：
"#,
        code: Some(
            r#"route:get('/api/users', 'user:get_list')
route:post('/api/users', 'user:create')
route:get('/api/users/{id}', 'user:get_one')
route:put('/api/users/{id}', 'user:update')
route:delete('/api/users/{id}', 'user:delete')"#,
        ),
    },
    Section {
        title: "6. Controller Methods",
        title_cn: "6. 控制器方法",
        content: r#"
Example of handling POST request:

处理 POST 请求示例：
"#,
        code: Some(
            r#"function _M:create()
    local Request = require('app.core.Request')
    local data = Request.post

    self:load('user_model')
    local id = self.user_model:insert(data)

    self:json({success = true, id = id})
end"#,
        ),
    },
    Section {
        title: "7. Available Methods",
        title_cn: "7. 可用方法",
        content: r#"
MyResty provides rich methods for rapid development:

MyResty 提供了丰富的开发方法：
"#,
        code: Some(
            r#"### Controller Methods
- self:json(data)           - Send JSON response
- self:output(content)      - Send raw output
- self:redirect(uri)        - Redirect
- self:load(model_name)     - Load model
- self:library(lib_name)    - Load library
- self:helper(helper_name)  - Load helper

### Model Methods
- self:get_all(where, limit, offset)
- self:get_by_id(id)
- self:insert(data)
- self:update(data, where)
- self:delete(where)
- self:query(sql)

### Request Methods
- Request.get               - GET parameters
- Request.post              - POST parameters
- Request.segments          - URI segments
- Request:segment(n)        - Get nth segment
- Request:method()          - HTTP method
- Request:is_ajax()         - Check AJAX request"#,
        ),
    },
    Section {
        title: "8. Connection Pool & Cache",
        title_cn: "8. 连接池与缓存",
        content: r#"
MyResty supports connection pooling for MySQL and Redis:

MyResty 支持 MySQL 和 Redis 连接池：
"#,
        code: Some(
            r#"### MySQL Pool / MySQL连接池
local Mysql = require('app.libraries.mysql')
local user = Mysql.query('SELECT * FROM users')

### Redis Pool / Redis连接池
local Redis = require('app.libraries.redis')
Redis.set('key', 'value', 3600)

### Model Usage / 模型使用
local user = self.user_model:get_by_id(1)
local users = self.user_model:get_all(nil, 10, 0)"#,
        ),
    },
];

/// Reference configuration listing shown in the appendix.
pub const CONFIG_CODE: &str = r#"-- app/config/config.lua
config = {
    -- Database / 数据库配置
    mysql = {
        host = '127.0.0.1',
        port = 3306,
        user = 'root',
        password = '',
        database = 'your_db',
        charset = 'utf8mb4',
        pool_size = 100,
        idle_timeout = 10000
    },

    -- Redis Configuration
    redis = {
        host = '127.0.0.1',
        port = 6379,
        password = '',
        db = 0,
        pool_size = 100
    },

    -- Application Config
    base_url = '',
    charset = 'UTF-8',
    log_path = '/var/www/web/my-resty/logs'
}"#;

/// Split section prose into paragraphs at blank lines. Lines inside a
/// paragraph stay separate.
pub fn paragraphs(content: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_are_numbered_in_display_order() {
        for (idx, section) in SECTIONS.iter().enumerate() {
            let prefix = format!("{}. ", idx + 1);
            assert!(section.title.starts_with(&prefix), "{}", section.title);
            assert!(section.title_cn.starts_with(&prefix), "{}", section.title_cn);
        }
    }

    #[test]
    fn only_quick_start_has_no_code() {
        let without_code: Vec<&str> = SECTIONS
            .iter()
            .filter(|section| section.code.is_none())
            .map(|section| section.title)
            .collect();
        assert_eq!(without_code, vec!["2. Quick Start"]);
    }

    #[test]
    fn splits_prose_at_blank_lines() {
        assert_eq!(
            paragraphs(SECTIONS[1].content),
            vec![
                "Getting started with MyResty is simple:",
                "开始使用 MyResty 非常简单：",
                "1. Install OpenResty\n安装 OpenResty",
                "2. Configure nginx.conf\n配置 nginx.conf",
                "3. Edit app/config/config.lua\n编辑数据库和Redis配置",
                "4. Start nginx\n启动 nginx",
            ]
        );
    }
}
